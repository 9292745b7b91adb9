use serde::{Deserialize, Serialize};
use std::fmt;

/// Printer address as issued by the designation list, e.g. "30B6B2".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ptr(String);

impl Ptr {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ptr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stage of the ticket-printer handshake.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrinterStage {
    Unissued,
    Issued,
    Assigned,
    Confirmed,
}

/// Tracks the three-step printer handshake: a designation list issues a pool
/// of addresses, DSIV picks one, PTR/ confirms the pick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrinterHandshake {
    pub ptr_numbers: Vec<Ptr>,
    pub dsiv_ptr: Option<Ptr>,
    pub ptr_assigned: Option<Ptr>,
}

impl PrinterHandshake {
    pub fn new() -> Self {
        Self {
            ptr_numbers: Vec::new(),
            dsiv_ptr: None,
            ptr_assigned: None,
        }
    }

    pub fn stage(&self) -> PrinterStage {
        if self.ptr_assigned.is_some() {
            PrinterStage::Confirmed
        } else if self.dsiv_ptr.is_some() {
            PrinterStage::Assigned
        } else if !self.ptr_numbers.is_empty() {
            PrinterStage::Issued
        } else {
            PrinterStage::Unissued
        }
    }

    /// Replace the issued pool. Re-running the designation list swaps the
    /// pool out but leaves any existing assignment untouched.
    pub fn issue(&mut self, ptrs: Vec<Ptr>) {
        self.ptr_numbers = ptrs;
    }

    /// Transition: Issued → Assigned. The address must come from the pool.
    pub fn assign(&mut self, ptr: &Ptr) -> Result<(), PrinterError> {
        if self.ptr_numbers.is_empty() {
            return Err(PrinterError::NothingIssued);
        }

        if !self.ptr_numbers.contains(ptr) {
            return Err(PrinterError::NotInPool {
                requested: ptr.clone(),
                available: self.ptr_numbers.clone(),
            });
        }

        self.dsiv_ptr = Some(ptr.clone());
        Ok(())
    }

    /// Transition: Assigned → Confirmed. The address must match the one
    /// picked at the assign step.
    pub fn confirm(&mut self, ptr: &Ptr) -> Result<(), PrinterError> {
        let assigned = match &self.dsiv_ptr {
            Some(existing) => existing.clone(),
            None => return Err(PrinterError::NothingAssigned),
        };

        if assigned != *ptr {
            return Err(PrinterError::Mismatch {
                requested: ptr.clone(),
                assigned,
            });
        }

        self.ptr_assigned = Some(ptr.clone());
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for PrinterHandshake {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PrinterError {
    #[error("No printer addresses issued")]
    NothingIssued,

    #[error("Printer address {requested} is not in the issued pool")]
    NotInPool { requested: Ptr, available: Vec<Ptr> },

    #[error("No printer address assigned")]
    NothingAssigned,

    #[error("Printer address {requested} does not match assigned {assigned}")]
    Mismatch { requested: Ptr, assigned: Ptr },
}
