//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::bst::Order;

/// Terminal playground for classic data structures: BST traversal animation,
/// parking-garage queues and stacks, tic-tac-toe, Towers of Hanoi
#[derive(Parser, Debug)]
#[command(name = "dsalab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug output (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Print author and version information
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Binary search tree with traversal animation
    Bst {
        #[command(subcommand)]
        command: BstCommands,
    },

    /// Parking-garage simulations
    Garage {
        #[command(subcommand)]
        command: GarageCommands,
    },

    /// Tic-tac-toe: replay a move list
    Tictactoe {
        /// Squares to play in order (0-8, row-major)
        squares: Vec<String>,
    },

    /// Towers of Hanoi: replay a move list
    Hanoi {
        /// Number of disks (3-5)
        #[arg(short = 'n', long, default_value_t = 3)]
        disks: u8,
        /// Moves as FROM-TO peg pairs (0-2), e.g. 0-2 0-1 2-1
        moves: Vec<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum BstCommands {
    /// Insert values and print the tree
    Show {
        /// Integer values in insertion order
        values: Vec<String>,
    },

    /// Walk the tree in the chosen order
    Traverse {
        /// Visiting order
        #[arg(short, long, value_enum, default_value_t = OrderArg::Inorder)]
        order: OrderArg,
        /// Reveal one step per tick instead of printing at once
        #[arg(short, long)]
        watch: bool,
        /// Integer values in insertion order
        values: Vec<String>,
    },

    /// Print the positioned node/edge graph
    Layout {
        /// Integer values in insertion order
        values: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum GarageCommands {
    /// First-in-first-out garage (front car departs first)
    Fifo {
        /// Script: +PLATE arrive, -PLATE depart plate, - depart next
        #[arg(allow_hyphen_values = true)]
        script: Vec<String>,
    },

    /// Last-in-first-out garage (top car departs first)
    Lifo {
        /// Script: +PLATE arrive, -PLATE depart plate, - depart next
        #[arg(allow_hyphen_values = true)]
        script: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print effective settings
    Show,
    /// Write the default config file
    Init,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OrderArg {
    Preorder,
    Inorder,
    Postorder,
}

impl From<OrderArg> for Order {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Preorder => Order::Preorder,
            OrderArg::Inorder => Order::Inorder,
            OrderArg::Postorder => Order::Postorder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_garage_script_when_parsing_then_depart_tokens_are_values_not_flags() {
        let cli = Cli::try_parse_from(["dsalab", "garage", "fifo", "+AAA", "-AAA", "-"]).unwrap();

        match cli.command {
            Some(Commands::Garage {
                command: GarageCommands::Fifo { script },
            }) => assert_eq!(script, vec!["+AAA", "-AAA", "-"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn given_lifo_script_when_parsing_then_depart_tokens_are_values_not_flags() {
        let cli = Cli::try_parse_from(["dsalab", "garage", "lifo", "+B-2", "-B-2"]).unwrap();

        match cli.command {
            Some(Commands::Garage {
                command: GarageCommands::Lifo { script },
            }) => assert_eq!(script, vec!["+B-2", "-B-2"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
