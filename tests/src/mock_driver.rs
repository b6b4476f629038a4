use quarry_core::{
    async_trait,
    driver::{Connection, Driver, Response},
    stmt::Rows,
    Error, Result,
};

use std::{
    collections::VecDeque,
    io,
    sync::{Arc, Mutex},
};

use crate::ExecLog;

/// An in-memory driver that records every statement it executes.
///
/// Responses are scripted ahead of time and handed out in order. Once the
/// script runs out, `SELECT` statements return no rows and everything else
/// reports zero affected rows. Clones share the same script and log, so a
/// test can keep a handle after moving the driver into a connector.
#[derive(Debug, Clone, Default)]
pub struct MockDriver {
    script: Arc<Mutex<Script>>,

    /// Log of all statements executed through this driver
    log: Arc<Mutex<Vec<ExecutedStatement>>>,
}

#[derive(Debug)]
pub struct ExecutedStatement {
    pub sql: String,
    pub response: Response,
}

#[derive(Debug, Default)]
struct Script {
    responses: VecDeque<Result<Response>>,

    /// Number of connections opened
    connects: usize,

    /// Remaining connection attempts that fail
    failing_connects: usize,

    /// Id handed out by the next insert
    next_insert_id: u64,
}

#[derive(Debug)]
struct MockConnection {
    script: Arc<Mutex<Script>>,
    log: Arc<Mutex<Vec<ExecutedStatement>>>,
    last_insert_id: u64,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a row set for the next statement.
    pub fn push_rows(&self, rows: Rows) -> &Self {
        self.push_response(Response::rows(rows))
    }

    pub fn push_response(&self, response: Response) -> &Self {
        self.script.lock().unwrap().responses.push_back(Ok(response));
        self
    }

    /// Makes the next statement fail with a driver error.
    pub fn push_error(&self, message: &str) -> &Self {
        let err = Error::driver(io::Error::other(message.to_string()));
        self.script.lock().unwrap().responses.push_back(Err(err));
        self
    }

    /// Makes the next `count` connection attempts fail.
    pub fn fail_connects(&self, count: usize) -> &Self {
        self.script.lock().unwrap().failing_connects = count;
        self
    }

    /// Sets the id returned after the next insert. Later inserts count up
    /// from it.
    pub fn next_insert_id(&self, id: u64) -> &Self {
        self.script.lock().unwrap().next_insert_id = id;
        self
    }

    /// Number of connections opened so far
    pub fn connects(&self) -> usize {
        self.script.lock().unwrap().connects
    }

    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.log.clone())
    }
}

#[async_trait]
impl Driver for MockDriver {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        let mut script = self.script.lock().unwrap();

        if script.failing_connects > 0 {
            script.failing_connects -= 1;
            return Err(Error::driver(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            )));
        }

        script.connects += 1;

        Ok(Box::new(MockConnection {
            script: self.script.clone(),
            log: self.log.clone(),
            last_insert_id: 0,
        }))
    }
}

#[async_trait]
impl Connection for MockConnection {
    async fn exec(&mut self, sql: &str) -> Result<Response> {
        let scripted = {
            let mut script = self.script.lock().unwrap();

            if sql.starts_with("INSERT") {
                script.next_insert_id = script.next_insert_id.max(1);
                self.last_insert_id = script.next_insert_id;
                script.next_insert_id += 1;
            }

            script.responses.pop_front()
        };

        let response = match scripted {
            Some(response) => response?,
            None if sql.to_ascii_lowercase().starts_with("select") => Response::rows(Rows::new()),
            None => Response::done(0),
        };

        self.log.lock().unwrap().push(ExecutedStatement {
            sql: sql.to_string(),
            response: response.clone(),
        });

        Ok(response)
    }

    fn last_insert_id(&self) -> u64 {
        self.last_insert_id
    }
}
