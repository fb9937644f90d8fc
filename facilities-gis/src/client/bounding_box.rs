use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// WGS84 search extent for a facility query, held in the map service's
/// envelope order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

#[derive(Error, Debug, PartialEq)]
pub enum BoundingBoxError {
    #[error("expected xmin,ymin,xmax,ymax, found {0} coordinates")]
    CoordinateCount(usize),
    #[error("coordinate '{0}' is not a number")]
    NotANumber(String),
    #[error("{axis} {value} is outside [{min},{max}]")]
    OutOfRange {
        axis: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{axis} extent is empty, {low} is not below {high}")]
    EmptyExtent {
        axis: &'static str,
        low: f64,
        high: f64,
    },
}

impl BoundingBox {
    /// validated extent. every coordinate must be a finite WGS84 value and
    /// each minimum strictly below its maximum.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self, BoundingBoxError> {
        let xmin = in_range("longitude", xmin, 180.0)?;
        let xmax = in_range("longitude", xmax, 180.0)?;
        let ymin = in_range("latitude", ymin, 90.0)?;
        let ymax = in_range("latitude", ymax, 90.0)?;
        if xmin >= xmax {
            return Err(BoundingBoxError::EmptyExtent {
                axis: "longitude",
                low: xmin,
                high: xmax,
            });
        }
        if ymin >= ymax {
            return Err(BoundingBoxError::EmptyExtent {
                axis: "latitude",
                low: ymin,
                high: ymax,
            });
        }
        Ok(Self {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }

    /// `geometry` parameter of an `esriGeometryEnvelope` query
    pub fn to_envelope(&self) -> String {
        self.to_string()
    }
}

fn in_range(axis: &'static str, value: f64, limit: f64) -> Result<f64, BoundingBoxError> {
    if value.is_finite() && (-limit..=limit).contains(&value) {
        Ok(value)
    } else {
        Err(BoundingBoxError::OutOfRange {
            axis,
            value,
            min: -limit,
            max: limit,
        })
    }
}

impl FromStr for BoundingBox {
    type Err = BoundingBoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coords = s
            .split(',')
            .map(|c| {
                let c = c.trim();
                c.parse::<f64>()
                    .map_err(|_| BoundingBoxError::NotANumber(c.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        match coords[..] {
            [xmin, ymin, xmax, ymax] => BoundingBox::new(xmin, ymin, xmax, ymax),
            _ => Err(BoundingBoxError::CoordinateCount(coords.len())),
        }
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.xmin, self.ymin, self.xmax, self.ymax)
    }
}

/// parses `xmin,ymin,xmax,ymax` in decimal degrees, the same order the map
/// service takes its envelope in
pub fn parse_bbox(s: &str) -> Result<BoundingBox, BoundingBoxError> {
    s.parse()
}
