//! JSON-backed administrator and ban lists.

use crate::error::RoleError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tempfile::NamedTempFile;

/// The first admins are the creators of the bot and cannot be removed.
pub const CREATOR_SLOTS: usize = 2;

/// Role lists as stored on disk.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Roles {
    /// Administrator ids, creators first.
    #[serde(rename = "Admins", default)]
    pub admins: Vec<i64>,
    /// Banned user ids.
    #[serde(rename = "Blocked", default)]
    pub banned: Vec<i64>,
}

/// Role lists guarded by a single lock and persisted on every change.
///
/// A mutation holds the lock until the file is written; if the write fails
/// the in-memory lists are restored before the lock is released.
#[derive(Debug)]
pub struct RoleStore {
    path: PathBuf,
    roles: Mutex<Roles>,
}

impl RoleStore {
    /// Load the roles file, or create it with `creators` as the admins.
    pub fn open<P: AsRef<Path>>(path: P, creators: &[i64]) -> Result<RoleStore, RoleError> {
        let path = path.as_ref().to_path_buf();

        let roles = match fs::read_to_string(&path) {
            Ok(json) => {
                log::info!("Reading roles from {}", path.display());
                parse_roles(&json)?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::warn!(
                    "Roles file {} not found, creating it with {} creator(s)",
                    path.display(),
                    creators.len()
                );
                let roles = Roles {
                    admins: creators.to_vec(),
                    banned: vec![],
                };
                write_roles(&path, &roles)?;
                roles
            }
            Err(e) => return Err(e.into()),
        };

        log::debug!(
            "roles loaded: admins={} banned={}",
            roles.admins.len(),
            roles.banned.len()
        );
        Ok(RoleStore {
            path,
            roles: Mutex::new(roles),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Position of `id` in the admin list.
    pub fn find_admin(&self, id: i64) -> Option<usize> {
        self.lock().admins.iter().position(|&a| a == id)
    }

    /// Position of `id` in the ban list.
    pub fn find_ban(&self, id: i64) -> Option<usize> {
        self.lock().banned.iter().position(|&b| b == id)
    }

    pub fn is_admin(&self, id: i64) -> bool {
        self.find_admin(id).is_some()
    }

    pub fn is_banned(&self, id: i64) -> bool {
        self.find_ban(id).is_some()
    }

    /// Copy of the current lists.
    pub fn snapshot(&self) -> Roles {
        self.lock().clone()
    }

    /// Add an admin. Returns `Ok(false)` if already present.
    pub fn add_admin(&self, id: i64) -> Result<bool, RoleError> {
        self.mutate("add_admin", id, |roles| {
            if roles.admins.contains(&id) {
                return Ok(false);
            }
            roles.admins.push(id);
            Ok(true)
        })
    }

    /// Remove an admin. Creators are protected.
    pub fn remove_admin(&self, id: i64) -> Result<bool, RoleError> {
        self.mutate("remove_admin", id, |roles| {
            match roles.admins.iter().position(|&a| a == id) {
                None => Ok(false),
                Some(index) if index < CREATOR_SLOTS => Err(RoleError::CreatorProtected(id)),
                Some(index) => {
                    roles.admins.remove(index);
                    Ok(true)
                }
            }
        })
    }

    /// Ban a user. Admins cannot be banned.
    pub fn add_ban(&self, id: i64) -> Result<bool, RoleError> {
        self.mutate("add_ban", id, |roles| {
            if roles.banned.contains(&id) {
                return Ok(false);
            }
            if roles.admins.contains(&id) {
                return Err(RoleError::AdminCannotBeBanned(id));
            }
            roles.banned.push(id);
            Ok(true)
        })
    }

    /// Lift a ban. Returns `Ok(false)` if the user was not banned.
    pub fn remove_ban(&self, id: i64) -> Result<bool, RoleError> {
        self.mutate("remove_ban", id, |roles| {
            match roles.banned.iter().position(|&b| b == id) {
                None => Ok(false),
                Some(index) => {
                    roles.banned.remove(index);
                    Ok(true)
                }
            }
        })
    }

    fn lock(&self) -> MutexGuard<'_, Roles> {
        // lists are only replaced wholesale, a poisoned guard still holds a valid state
        self.roles.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn mutate<F>(&self, action: &str, id: i64, change: F) -> Result<bool, RoleError>
    where
        F: FnOnce(&mut Roles) -> Result<bool, RoleError>,
    {
        let mut roles = self.lock();
        let previous = roles.clone();

        if !change(&mut roles)? {
            log::debug!("{action}({id}): nothing to change");
            return Ok(false);
        }

        if let Err(e) = write_roles(&self.path, &roles) {
            log::warn!("{action}({id}) failed, rolling back: {e}");
            *roles = previous;
            return Err(e);
        }

        log::info!(target: "netcalc::audit", "{action}({id}) saved to {}", self.path.display());
        Ok(true)
    }
}

fn parse_roles(json: &str) -> Result<Roles, RoleError> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| RoleError::Json(format!("path={} error={}", e.path(), e)))
}

/// Write the lists to a temp file next to `path` and rename it into place.
fn write_roles(path: &Path, roles: &Roles) -> Result<(), RoleError> {
    let json = serde_json::to_string_pretty(roles)?;

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut temp_file = NamedTempFile::new_in(parent)?;
    temp_file.write_all(json.as_bytes())?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;

    Ok(())
}
