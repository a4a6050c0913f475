use std::env;

/// Capabilities the host environment gates access behind.
/// Write capability is declared up front and never prompted for,
/// so only `ReadContacts` is ever requested at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    ReadContacts,
    WriteContacts,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ReadContacts => "READ_CONTACTS",
            Permission::WriteContacts => "WRITE_CONTACTS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    Granted,
    Denied,
}

/// The authorization boundary in front of the contact store. The host
/// resolves each request once; a denial holds for the rest of the session.
pub trait PermissionGate {
    fn request(&self, permission: Permission) -> Grant;
}

/// Gate driven by the process environment. Read access is denied while
/// `PHONEBOOK_DENY_CONTACTS` is set truthy, granted otherwise.
pub struct EnvGate;

pub const DENY_ENV_KEY: &str = "PHONEBOOK_DENY_CONTACTS";

impl PermissionGate for EnvGate {
    fn request(&self, permission: Permission) -> Grant {
        if permission == Permission::ReadContacts {
            let denied = env::var(DENY_ENV_KEY)
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false);

            if denied {
                return Grant::Denied;
            }
        }
        Grant::Granted
    }
}
