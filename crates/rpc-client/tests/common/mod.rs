#![allow(dead_code)]

use async_trait::async_trait;
use rpc_client::{Client, ClientConfig, Transport, TransportError};
use serde_json::{Map, Value};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

/// One recorded `request` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub service: String,
    pub method: String,
    pub args: Vec<Value>,
}

impl Call {
    /// `(model, method, args, kwargs)` of an `execute_kw` call.
    pub fn execute_kw(&self) -> (String, String, Vec<Value>, Map<String, Value>) {
        assert_eq!(self.service, "object");
        assert_eq!(self.method, "execute_kw");

        let text = |i: usize| self.args[i].as_str().unwrap_or_default().to_string();
        let args = self.args[5].as_array().cloned().unwrap_or_default();
        let kwargs = self.args[6].as_object().cloned().unwrap_or_default();
        (text(3), text(4), args, kwargs)
    }
}

/// In-memory transport replaying canned responses in order.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
    calls: Mutex<Vec<Call>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, value: Value) {
        self.responses.lock().unwrap().push_back(Ok(value));
    }

    pub fn fail(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Call {
        self.calls().pop().expect("no call was made")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(
        &self,
        service: &str,
        method: &str,
        args: Vec<Value>,
    ) -> Result<Value, TransportError> {
        self.calls.lock().unwrap().push(Call {
            service: service.to_string(),
            method: method.to_string(),
            args,
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connection("no canned response".to_string())))
    }
}

pub fn client(transport: &Arc<MockTransport>) -> Client {
    Client::new(transport.clone(), ClientConfig::new("demo", 2, "secret"))
}
