use async_trait::async_trait;
use kv_log_macro as log;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, sync::Mutex, time::Duration};

use authscreen::{AuthService, Credentials, SubmissionFailure};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// In-memory stand-in for a remote auth backend
pub struct AccountDirectory {
    accounts: Mutex<HashMap<String, Account>>,
    latency: Duration,
}

impl AccountDirectory {
    pub fn new(accounts: impl IntoIterator<Item = Account>) -> Self {
        AccountDirectory {
            accounts: Mutex::new(
                accounts
                    .into_iter()
                    .map(|account| (account.email.clone(), account))
                    .collect(),
            ),
            latency: Duration::ZERO,
        }
    }

    /// Delays every answer, to make the loading state visible
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn contains(&self, email: &str) -> bool {
        self.accounts
            .lock()
            .map(|accounts| accounts.contains_key(email))
            .unwrap_or(false)
    }

    fn accounts(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, Account>>, SubmissionFailure> {
        self.accounts
            .lock()
            .map_err(|_| SubmissionFailure::new("Account directory unavailable"))
    }
}

#[async_trait]
impl AuthService for AccountDirectory {
    async fn login(&self, email: &str, password: &str) -> Result<(), SubmissionFailure> {
        tokio::time::sleep(self.latency).await;

        let accounts = self.accounts()?;
        match accounts.get(email) {
            None => Err(SubmissionFailure::new("This email could not be found!")),
            Some(account) if account.password != password => {
                Err(SubmissionFailure::new("This password is not valid!"))
            }
            Some(_) => {
                log::info!("Signed in", { email: email });
                Ok(())
            }
        }
    }

    async fn signup(&self, credentials: &Credentials) -> Result<(), SubmissionFailure> {
        tokio::time::sleep(self.latency).await;

        let mut accounts = self.accounts()?;
        if accounts.contains_key(&credentials.email) {
            return Err(SubmissionFailure::new("This email exists already!"));
        }

        accounts.insert(
            credentials.email.clone(),
            Account {
                email: credentials.email.clone(),
                password: credentials.password.clone(),
                name: credentials.name.clone(),
                phone: credentials.phone.clone(),
            },
        );
        log::info!("Registered", { email: credentials.email.as_str() });
        Ok(())
    }
}
