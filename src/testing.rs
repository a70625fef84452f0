//! In-process gateway fakes shared by module tests.
//!
//! Two fakes cover the two test styles: [`ScriptedGateway`] replies
//! from a canned per-command table and records what was invoked, while
//! [`MemoryBackend`] is a small working backend with an in-memory
//! clipboard and real change events, for round-trip and watch tests.

use std::collections::HashMap;
use std::sync::Mutex;

use futures::future::BoxFuture;
use futures::{FutureExt, StreamExt};
use serde_json::{Value, json};
use tokio::sync::mpsc;

use crate::commands::Command;
use crate::error::{Error, Result};
use crate::gateway::{EventStream, Gateway};

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn stream_from(rx: mpsc::UnboundedReceiver<Value>) -> EventStream {
    futures::stream::unfold(rx, |mut rx| async move { rx.recv().await.map(|v| (v, rx)) }).boxed()
}

/// Gateway that replies from a canned response table and records the
/// order of invoked commands with their arguments. Unscripted commands
/// fail loudly, so a test sees exactly the calls it declared.
pub struct ScriptedGateway {
    responses: HashMap<&'static str, std::result::Result<Value, String>>,
    invoked: Mutex<Vec<(&'static str, Option<Value>)>>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<Value>>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            invoked: Mutex::new(Vec::new()),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Script a successful response for a command.
    pub fn respond(mut self, command: Command, value: Value) -> Self {
        self.responses.insert(command.name(), Ok(value));
        self
    }

    /// Script a backend fault for a command.
    pub fn fail(mut self, command: Command, message: &str) -> Self {
        self.responses.insert(command.name(), Err(message.into()));
        self
    }

    /// Commands invoked so far, in call order.
    pub fn invoked(&self) -> Vec<(&'static str, Option<Value>)> {
        self.invoked.lock().unwrap().clone()
    }

    /// Fire the subscribed event on every live subscriber.
    pub fn emit(&self, payload: Value) {
        self.subscribers
            .lock()
            .unwrap()
            .retain(|tx| tx.send(payload.clone()).is_ok());
    }
}

impl Gateway for ScriptedGateway {
    fn invoke(&self, command: &'static str, args: Option<Value>) -> BoxFuture<'_, Result<Value>> {
        self.invoked.lock().unwrap().push((command, args));
        let result = match self.responses.get(command) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(message)) => Err(Error::Backend(message.clone())),
            None => Err(Error::Backend(format!("unscripted command: {command}"))),
        };
        futures::future::ready(result).boxed()
    }

    fn listen(&self, _event: &'static str) -> BoxFuture<'_, Result<EventStream>> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().unwrap().push(tx);
        futures::future::ready(Ok(stream_from(rx))).boxed()
    }
}

/// Minimal working backend with an in-memory clipboard.
///
/// Writes mutate format slots and, while watching, fire the change
/// event to every subscriber — close enough to the real backend for
/// round-trip and watch tests. Reading an absent format fails, which
/// exercises the abort-on-error aggregation path the same way a strict
/// backend would.
pub struct MemoryBackend {
    slots: Mutex<HashMap<&'static str, Value>>,
    watching: Mutex<bool>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<Value>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            watching: Mutex::new(false),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    fn notify_change(&self) {
        if !*self.watching.lock().unwrap() {
            return;
        }
        self.subscribers
            .lock()
            .unwrap()
            .retain(|tx| tx.send(Value::Null).is_ok());
    }

    fn write_slot(&self, format: &'static str, value: Value) {
        self.slots.lock().unwrap().insert(format, value);
        self.notify_change();
    }

    fn read_slot(&self, format: &'static str) -> std::result::Result<Value, Error> {
        self.slots
            .lock()
            .unwrap()
            .get(format)
            .cloned()
            .ok_or_else(|| Error::Backend(format!("no {format} on clipboard")))
    }

    fn has_slot(&self, format: &'static str) -> Value {
        Value::Bool(self.slots.lock().unwrap().contains_key(format))
    }

    fn handle(&self, command: &'static str, args: Option<Value>) -> Result<Value> {
        let Some(op) = command.strip_prefix("plugin:clipboard-next|") else {
            return Err(Error::Backend(format!("unknown namespace: {command}")));
        };
        let arg = |name: &str| -> Result<Value> {
            args.as_ref()
                .and_then(|a| a.get(name))
                .cloned()
                .ok_or_else(|| Error::Backend(format!("{op}: missing argument {name}")))
        };

        match op {
            "start_watch" => {
                *self.watching.lock().unwrap() = true;
                Ok(Value::Null)
            }
            "stop_watch" => {
                *self.watching.lock().unwrap() = false;
                Ok(Value::Null)
            }
            "has_text" => Ok(self.has_slot("text")),
            "has_rtf" => Ok(self.has_slot("rtf")),
            "has_html" => Ok(self.has_slot("html")),
            "has_image" => Ok(self.has_slot("image")),
            "has_files" => Ok(self.has_slot("files")),
            "read_text" => self.read_slot("text"),
            "read_rtf" => self.read_slot("rtf"),
            "read_html" => self.read_slot("html"),
            "read_image" => self.read_slot("image"),
            "read_files" => self.read_slot("files"),
            "write_text" => {
                self.write_slot("text", arg("content")?);
                Ok(Value::Null)
            }
            "write_rtf" => {
                self.write_slot("rtf", arg("content")?);
                Ok(Value::Null)
            }
            "write_html" => {
                self.write_slot("html", arg("content")?);
                Ok(Value::Null)
            }
            "write_image" => {
                let path = arg("imagePath")?;
                self.write_slot(
                    "image",
                    json!({"path": path, "width": 1, "height": 1, "size": 1}),
                );
                Ok(Value::Null)
            }
            "write_files" => {
                let paths = arg("filesPath")?;
                let entries: Vec<Value> = paths
                    .as_array()
                    .cloned()
                    .unwrap_or_default()
                    .into_iter()
                    .map(|path| json!({"path": path, "size": 1}))
                    .collect();
                let total = entries.len() as u64;
                self.write_slot("files", json!({"files": entries, "size": total}));
                Ok(Value::Null)
            }
            "clear" => {
                self.slots.lock().unwrap().clear();
                self.notify_change();
                Ok(Value::Null)
            }
            "get_file_path" => Ok(json!("/tmp/clipboard-next")),
            other => Err(Error::Backend(format!("unknown command: {other}"))),
        }
    }
}

impl Gateway for MemoryBackend {
    fn invoke(&self, command: &'static str, args: Option<Value>) -> BoxFuture<'_, Result<Value>> {
        futures::future::ready(self.handle(command, args)).boxed()
    }

    fn listen(&self, _event: &'static str) -> BoxFuture<'_, Result<EventStream>> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().unwrap().push(tx);
        futures::future::ready(Ok(stream_from(rx))).boxed()
    }
}
