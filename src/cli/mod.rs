//! CLI 模块

pub mod tasks;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sprig")]
#[command(version)]
#[command(about = "A tiny local todo list for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    Add {
        /// Task title (words are joined with spaces)
        #[arg(required = true)]
        title: Vec<String>,
    },
    /// List all tasks
    List,
    /// Toggle a task's completed state
    Done {
        /// Task id (see `sprig list`)
        id: u64,
    },
    /// Delete a task
    Rm {
        /// Task id (see `sprig list`)
        id: u64,
    },
}
