use crate::error::FatResult;
use std::io::Write;

pub mod c;
pub mod tac;

pub use tac::Unit;

pub struct Sink {
    pub name: String,
    pub body: Vec<u8>,
}

impl Sink {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Vec::new(),
        }
    }

    pub fn print(&mut self, data: &[u8]) -> FatResult<()> {
        self.body.write_all(data)?;
        Ok(())
    }

    pub fn println(&mut self, data: &[u8]) -> FatResult<()> {
        self.body.write_all(data)?;
        self.body.write_all(b"\n")?;
        Ok(())
    }

    pub fn done(self) -> FatResult<String> {
        String::from_utf8(self.body)
            .map_err(|e| format!("{}: non UTF-8 output: {}", self.name, e).into())
    }
}

pub trait Trans {
    fn trans(&mut self, unit: &Unit, sink: &mut Sink) -> FatResult<()>;
}
