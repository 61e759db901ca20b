use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use shipdesk_carrier::CarrierKind;
use std::path::PathBuf;

/// Build carrier manifests, settlement reports and tag updates from exported records
#[derive(Parser, Debug)]
#[command(name = "shipdesk")]
#[command(version)]
pub struct Cli {
    /// Directory to write files into (overrides export.out_dir)
    #[arg(long, global = true)]
    pub out_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a carrier shipping manifest for a list of orders
    Manifest {
        #[arg(long, value_enum)]
        carrier: CarrierArg,

        /// JSON array of orders
        #[arg(short, long)]
        input: PathBuf,

        /// Yamato invoice type code (0, 2-9, A)
        #[arg(long, default_value = "0")]
        shipment_type: String,

        /// Ship date printed on the manifest (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        ship_date: Option<NaiveDate>,
    },

    /// Write the affiliate settlement report
    Settlement {
        /// JSON array of orders
        #[arg(short, long)]
        input: PathBuf,

        /// Commission percentage, e.g. 10 or 7.5
        #[arg(long)]
        commission: String,

        /// Also print the tag updates marking these orders as paid
        #[arg(long)]
        mark_paid: bool,
    },

    /// Write the customer list
    Customers {
        /// JSON array of customers
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the tag updates an operation would send, one per record
    Tags(TagsArgs),
}

#[derive(Args, Debug)]
pub struct TagsArgs {
    #[arg(long, value_enum)]
    pub target: TargetArg,

    /// JSON array of customers or orders
    #[arg(short, long)]
    pub input: PathBuf,

    #[arg(long, conflicts_with_all = ["remove", "replace"])]
    pub add: Option<String>,

    #[arg(long, conflicts_with = "replace")]
    pub remove: Option<String>,

    /// Tags to replace (comma-separated); requires --with
    #[arg(long, value_delimiter = ',', requires = "with")]
    pub replace: Option<Vec<String>>,

    /// Replacement tag
    #[arg(long = "with")]
    pub with: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarrierArg {
    Yamato,
    Seino,
}

impl From<CarrierArg> for CarrierKind {
    fn from(arg: CarrierArg) -> Self {
        match arg {
            CarrierArg::Yamato => CarrierKind::Yamato,
            CarrierArg::Seino => CarrierKind::Seino,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetArg {
    Customers,
    Orders,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_args() {
        let cli = Cli::parse_from([
            "shipdesk",
            "manifest",
            "--carrier",
            "seino",
            "--input",
            "orders.json",
            "--ship-date",
            "2024-04-30",
            "--out-dir",
            "out",
        ]);

        assert_eq!(cli.out_dir, Some(PathBuf::from("out")));
        match cli.command {
            Commands::Manifest {
                carrier,
                shipment_type,
                ship_date,
                ..
            } => {
                assert_eq!(carrier, CarrierArg::Seino);
                assert_eq!(shipment_type, "0");
                assert_eq!(ship_date, NaiveDate::from_ymd_opt(2024, 4, 30));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_replace_requires_with() {
        let result = Cli::try_parse_from([
            "shipdesk", "tags", "--target", "orders", "-i", "o.json", "--replace", "a,b",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_add_conflicts_with_remove() {
        let result = Cli::try_parse_from([
            "shipdesk", "tags", "--target", "orders", "-i", "o.json", "--add", "a", "--remove", "b",
        ]);
        assert!(result.is_err());
    }
}
