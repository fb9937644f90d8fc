mod bounding_box;
mod client_error;
mod facility_directory;
mod map_server_client;
mod map_server_config;
mod query_ops;

pub use bounding_box::{parse_bbox, BoundingBox, BoundingBoxError};
pub use client_error::FacilityClientError;
pub use facility_directory::FacilityDirectory;
pub use map_server_client::MapServerClient;
pub use map_server_config::{MapServerClientConfig, VHA_MAPSERVER_URL_ENV};
pub use query_ops::{id_where_clause, parse_query_response, validate_services, where_clause};
