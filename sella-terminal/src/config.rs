use serde::{Deserialize, Serialize};

/// Interpreter tunables. Deserializable so an embedding shell can load
/// overrides from its own config source; the defaults reproduce the terminal
/// being emulated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Days from now to the ticketing deadline quoted by PQ
    #[serde(default = "default_ticketing_deadline_days")]
    pub ticketing_deadline_days: i64,

    /// PTR rows on the PE* designation list
    #[serde(default = "default_ptr_pool_size")]
    pub ptr_pool_size: usize,

    /// CRT rows on the PE* designation list
    #[serde(default = "default_crt_entries")]
    pub crt_entries: usize,

    /// Leading digits of generated ticket numbers
    #[serde(default = "default_ticket_number_prefix")]
    pub ticket_number_prefix: String,

    /// Letters in a generated record locator
    #[serde(default = "default_pnr_length")]
    pub pnr_length: usize,
}

fn default_ticketing_deadline_days() -> i64 {
    30
}

fn default_ptr_pool_size() -> usize {
    2
}

fn default_crt_entries() -> usize {
    5
}

fn default_ticket_number_prefix() -> String {
    "157".to_string()
}

fn default_pnr_length() -> usize {
    6
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            ticketing_deadline_days: default_ticketing_deadline_days(),
            ptr_pool_size: default_ptr_pool_size(),
            crt_entries: default_crt_entries(),
            ticket_number_prefix: default_ticket_number_prefix(),
            pnr_length: default_pnr_length(),
        }
    }
}
