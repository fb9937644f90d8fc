use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use super::FacilitiesAppError;
use crate::adapter::{from_gis_batch, Facility, GisRecord};
use crate::client::{
    parse_bbox, validate_services, where_clause, BoundingBox, FacilityDirectory,
    MapServerClientConfig,
};

/// command line tool turning VHA facility map service records into facility documents
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct FacilitiesApp {
    /// select the facility operation to run
    #[command(subcommand)]
    pub op: FacilitiesOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum FacilitiesOperation {
    /// transforms GIS records stored in a JSON file. accepts either an array
    /// of records or a map service query response with a `features` array.
    Transform {
        /// JSON file with GIS records
        #[arg(short, long)]
        input_file: String,
        /// output JSON file. facilities are written to stdout when omitted.
        #[arg(short, long)]
        output_file: Option<String>,
    },
    /// queries the map service for facilities within a bounding box
    Query {
        /// extent as xmin,ymin,xmax,ymax in decimal degrees
        #[arg(long, value_parser = parse_bbox, allow_hyphen_values = true)]
        bbox: BoundingBox,
        /// comma-delimited service codes every result must offer
        #[arg(long, value_delimiter = ',')]
        services: Option<Vec<String>>,
        /// path to .toml or .json map service client configuration
        #[arg(long)]
        configuration_file: Option<String>,
    },
    /// fetches a single facility by station number
    Find {
        #[arg(long)]
        id: String,
        /// path to .toml or .json map service client configuration
        #[arg(long)]
        configuration_file: Option<String>,
    },
    /// prints the where clause used to filter facilities by service
    WhereClause {
        #[arg(long, value_delimiter = ',')]
        services: Vec<String>,
    },
}

impl FacilitiesOperation {
    pub fn run(&self) -> Result<(), FacilitiesAppError> {
        match self {
            FacilitiesOperation::Transform {
                input_file,
                output_file,
            } => {
                let records = read_records(Path::new(input_file))?;
                log::info!("transforming {} records from {input_file}", records.len());
                let facilities = from_gis_batch(&records);
                write_facilities(&facilities, output_file.as_deref())
            }
            FacilitiesOperation::Query {
                bbox,
                services,
                configuration_file,
            } => {
                let client = read_configuration(configuration_file.as_ref())?.build()?;
                log::info!("querying facilities within {bbox}");
                let facilities = client.query_facilities(bbox, services.as_deref())?;
                write_facilities(&facilities, None)
            }
            FacilitiesOperation::Find {
                id,
                configuration_file,
            } => {
                let client = read_configuration(configuration_file.as_ref())?.build()?;
                match client.find_facility(id)? {
                    Some(facility) => write_facilities(&[facility], None),
                    None => {
                        log::warn!("no facility found with id {id}");
                        write_facilities(&[], None)
                    }
                }
            }
            FacilitiesOperation::WhereClause { services } => {
                validate_services(services)?;
                println!("{}", where_clause(Some(services.as_slice())).unwrap_or_default());
                Ok(())
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsFile {
    QueryResponse { features: Vec<GisRecord> },
    Records(Vec<GisRecord>),
}

fn read_records(path: &Path) -> Result<Vec<GisRecord>, FacilitiesAppError> {
    let contents = std::fs::read_to_string(path)?;
    let records_file: RecordsFile =
        serde_json::from_str(&contents).map_err(|e| FacilitiesAppError::InputError {
            path: path.to_string_lossy().to_string(),
            message: e.to_string(),
        })?;
    match records_file {
        RecordsFile::QueryResponse { features } => Ok(features),
        RecordsFile::Records(records) => Ok(records),
    }
}

fn read_configuration(
    configuration_file: Option<&String>,
) -> Result<MapServerClientConfig, FacilitiesAppError> {
    match configuration_file {
        None => Ok(MapServerClientConfig::default()),
        Some(f) => {
            log::info!("reading map service configuration from {f}");
            Ok(MapServerClientConfig::try_from(f)?)
        }
    }
}

fn write_facilities(
    facilities: &[Facility],
    output_file: Option<&str>,
) -> Result<(), FacilitiesAppError> {
    match output_file {
        Some(f) => {
            let mut writer = BufWriter::new(File::create(f)?);
            serde_json::to_writer_pretty(&mut writer, facilities)?;
            writer.flush()?;
            log::info!("wrote {} facilities to {f}", facilities.len());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, facilities)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
