use std::io::{self, Write};
use anyhow::Result;
use crate::config::StoreConfig;
use crate::storage::{build_sample_batch, count_by_name, RecordStore, StoreError};
use super::display::{write_records, write_summary};

pub struct CLI {
    pub config: StoreConfig,
    pub store: RecordStore,
}

impl CLI {
    pub fn new(config: StoreConfig) -> Self {
        let store = RecordStore::new(config.data_path.clone());
        CLI { config, store }
    }

    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Write phase, then read phase. Only a write-phase failure is returned.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        if let Err(e) = self.write_phase() {
            writeln!(out, "Error al procesar el archivo binario: {}", e)?;
            return Err(e.into());
        }
        self.read_phase(out)
    }

    fn write_phase(&self) -> std::result::Result<(), StoreError> {
        let records = build_sample_batch();
        self.store.save(&records)
    }

    fn read_phase<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.store.load() {
            Ok(records) => {
                write_records(out, &records)?;
                write_summary(out, count_by_name(&records, &self.config.search_name))?;
            }
            Err(e) => {
                tracing::error!("read phase failed: {}", e);
                writeln!(out, "{}", e)?;
            }
        }
        Ok(())
    }
}
