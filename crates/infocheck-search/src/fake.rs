//! In-process `BankLookup` used by the unit tests.

use async_trait::async_trait;
use infocheck_core::{Bank, BankId};
use infocheck_lookup::{BankLookup, LookupError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

enum Reply {
    Banks(Vec<Bank>, Duration),
    Fail,
}

/// Scripted lookup service that records every term it is asked for.
#[derive(Default)]
pub(crate) struct FakeLookup {
    replies: Mutex<HashMap<String, Reply>>,
    calls: Mutex<Vec<String>>,
}

impl FakeLookup {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn respond(&self, term: &str, banks: Vec<Bank>) {
        self.respond_after(term, banks, Duration::ZERO);
    }

    pub(crate) fn respond_after(&self, term: &str, banks: Vec<Bank>, delay: Duration) {
        self.replies
            .lock()
            .unwrap()
            .insert(term.to_string(), Reply::Banks(banks, delay));
    }

    pub(crate) fn fail(&self, term: &str) {
        self.replies
            .lock()
            .unwrap()
            .insert(term.to_string(), Reply::Fail);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BankLookup for FakeLookup {
    async fn autocomplete(&self, term: &str) -> infocheck_lookup::Result<Vec<Bank>> {
        self.calls.lock().unwrap().push(term.to_string());

        let reply = match self.replies.lock().unwrap().get(term) {
            Some(Reply::Banks(banks, delay)) => Ok((banks.clone(), *delay)),
            Some(Reply::Fail) => Err(()),
            None => Ok((Vec::new(), Duration::ZERO)),
        };

        match reply {
            Ok((banks, delay)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(banks)
            }
            Err(()) => Err(LookupError::Api {
                status: 503,
                message: "Service Unavailable".to_string(),
            }),
        }
    }
}

pub(crate) fn bank(id: i64, name: &str) -> Bank {
    Bank::new(BankId::Number(id), name)
}
