use clap::ValueEnum;
use serde::Serialize;

/// Permission tier. Master access implies manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum Role {
    Associate,
    Manager,
    /// Manager with master access.
    Master,
}

impl Role {
    pub fn is_manager(&self) -> bool {
        !matches!(self, Role::Associate)
    }

    pub fn has_master(&self) -> bool {
        matches!(self, Role::Master)
    }

    /// Rebuild the role from the persisted `(isManager, hasMaster)` pair.
    /// Master without manager is not a legal tier and reads as associate.
    pub fn from_flags(is_manager: bool, has_master: bool) -> Self {
        match (is_manager, has_master) {
            (false, _) => Role::Associate,
            (true, false) => Role::Manager,
            (true, true) => Role::Master,
        }
    }

    pub fn to_flags(&self) -> (bool, bool) {
        (self.is_manager(), self.has_master())
    }

    /// Short tag shown next to names in listings.
    pub fn tag(&self) -> &'static str {
        match self {
            Role::Associate => "",
            Role::Manager => "MGR",
            Role::Master => "MGR*",
        }
    }
}

/// Role mutation requested through the "change status" screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleChange {
    #[value(name = "promote")]
    PromoteToManager,
    #[value(name = "demote")]
    DemoteToAssociate,
    GrantMaster,
    RevokeMaster,
}

impl RoleChange {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleChange::PromoteToManager => "promote",
            RoleChange::DemoteToAssociate => "demote",
            RoleChange::GrantMaster => "grant-master",
            RoleChange::RevokeMaster => "revoke-master",
        }
    }

    /// Whether the target needs a manager pin once the change is applied.
    pub fn needs_pin(&self) -> bool {
        matches!(self, RoleChange::PromoteToManager | RoleChange::GrantMaster)
    }

    /// Role after the change, or `None` when `from` is already there.
    pub fn apply_to(&self, from: Role) -> Option<Role> {
        use RoleChange::*;
        match self {
            PromoteToManager if from.is_manager() => None,
            DemoteToAssociate if !from.is_manager() => None,
            GrantMaster if from.has_master() => None,
            RevokeMaster if !from.has_master() => None,
            PromoteToManager | RevokeMaster => Some(Role::Manager),
            GrantMaster => Some(Role::Master),
            DemoteToAssociate => Some(Role::Associate),
        }
    }

    pub fn unchanged_message(&self) -> &'static str {
        match self {
            RoleChange::PromoteToManager => "Employee is already a manager",
            RoleChange::DemoteToAssociate => "This employee is already an associate",
            RoleChange::GrantMaster => "Employee already has master access",
            RoleChange::RevokeMaster => "This employee does not have master access",
        }
    }
}
