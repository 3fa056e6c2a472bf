use std::collections::HashMap;

use crate::{
    config::SecurityConfig,
    error::{AppError, Result},
    models::{Principal, UserRole},
};

#[derive(Debug, Clone)]
struct Account {
    role: UserRole,
    password_hash: String,
}

/// Fixed username to (role, bcrypt hash) map, built once at startup.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    accounts: HashMap<String, Account>,
    /// Checked for unknown usernames, which then fail like a wrong password.
    dummy_hash: String,
}

fn hash_password(password: &str, cost: u32) -> Result<String> {
    bcrypt::hash(password, cost)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))
}

impl CredentialStore {
    /// Hashes every configured account with the configured bcrypt cost.
    pub fn from_config(config: &SecurityConfig) -> Result<Self> {
        let mut accounts = HashMap::with_capacity(config.accounts.len());

        for account in &config.accounts {
            let password_hash = hash_password(&account.password, config.bcrypt_cost)?;

            accounts.insert(
                account.username.clone(),
                Account {
                    role: account.role,
                    password_hash,
                },
            );
        }

        let dummy_hash = hash_password("not-an-account", config.bcrypt_cost)?;

        tracing::info!("Loaded {} in-memory accounts", accounts.len());

        Ok(Self {
            accounts,
            dummy_hash,
        })
    }

    /// Returns the principal when `username` exists and `password` matches its hash.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Option<Principal>> {
        let account = self.accounts.get(username);
        let hash = account.map_or(self.dummy_hash.as_str(), |a| a.password_hash.as_str());

        let is_valid = bcrypt::verify(password, hash)
            .map_err(|e| AppError::InternalError(format!("Password verification failed: {}", e)))?;

        Ok(account
            .filter(|_| is_valid)
            .map(|account| Principal {
                username: username.to_string(),
                role: account.role,
            }))
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}
