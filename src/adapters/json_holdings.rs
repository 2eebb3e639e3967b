//! JSON holdings adapter implementing HoldingsPort.
//!
//! Accepts either a bare holdings array or a full portfolio object with a
//! `holdings` field, from a file path or stdin.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::error::FoliostatError;
use crate::domain::holding::Holding;
use crate::ports::holdings_port::HoldingsPort;

#[derive(Deserialize)]
#[serde(untagged)]
enum HoldingsDocument {
    List(Vec<Holding>),
    Portfolio { holdings: Vec<Holding> },
}

impl From<HoldingsDocument> for Vec<Holding> {
    fn from(doc: HoldingsDocument) -> Self {
        match doc {
            HoldingsDocument::List(holdings) => holdings,
            HoldingsDocument::Portfolio { holdings } => holdings,
        }
    }
}

enum Source {
    File(PathBuf),
    Stdin,
}

pub struct JsonHoldingsAdapter {
    source: Source,
}

impl JsonHoldingsAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        Self {
            source: Source::File(path.as_ref().to_path_buf()),
        }
    }

    pub fn from_stdin() -> Self {
        Self {
            source: Source::Stdin,
        }
    }

    pub fn parse(content: &str) -> Result<Vec<Holding>, FoliostatError> {
        let doc: HoldingsDocument =
            serde_json::from_str(content).map_err(|e| FoliostatError::HoldingsParse {
                reason: e.to_string(),
            })?;
        Ok(doc.into())
    }
}

impl HoldingsPort for JsonHoldingsAdapter {
    fn load_holdings(&self) -> Result<Vec<Holding>, FoliostatError> {
        let content = match &self.source {
            Source::File(path) => fs::read_to_string(path)?,
            Source::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };
        Self::parse(&content)
    }
}
