use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "eth-view-gateway", version, about = "Simplified JSON views of Ethereum blocks and transactions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Override bind address, e.g. 0.0.0.0:8080
        #[arg(long)]
        addr: Option<String>,
    },
    /// Print the view of one block as JSON
    Block {
        /// Base-10 block number
        number: String,
    },
    /// Print the view of one transaction as JSON
    Tx {
        /// 32-byte transaction hash in hex
        hash: String,
    },
}
