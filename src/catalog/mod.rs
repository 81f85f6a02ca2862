//! Product catalog types
//!
//! Product records are an external data source (products.json) loaded
//! fully before matching. The catalog is read-only for the lifetime of
//! a batch; it is passed explicitly to the matcher and renderer, never
//! held as process-wide state.

use crate::error::{Result, YardproofError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One measured footprint in feet / square feet
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Footprint {
    pub length: f64,
    pub width: f64,
    /// Inflatables list height on the site; some records omit it
    #[serde(default)]
    pub height: Option<f64>,
    pub sq_ft: f64,
}

impl Footprint {
    /// Dimension string for display: `20' × 18'` or `20' × 18' × 15'`
    pub fn dimension_label(&self) -> String {
        match self.height {
            Some(h) => format!("{}' × {}' × {}'", self.length, self.width, h),
            None => format!("{}' × {}'", self.length, self.width),
        }
    }

    fn is_well_formed(&self) -> bool {
        let finite_positive = |v: f64| v.is_finite() && v > 0.0;
        finite_positive(self.length) && finite_positive(self.width) && finite_positive(self.sq_ft)
    }
}

/// Product category tag
///
/// The known set comes from the rental site's item feed; anything new
/// in the feed deserializes as `Other` instead of failing the load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    BounceHouse,
    WaterSlide,
    Combo,
    Other,
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Category::from_tag(&tag))
    }
}

impl Category {
    /// Parse a feed tag, mapping unknown tags to `Other`
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "bounce_house" => Category::BounceHouse,
            "water_slide" => Category::WaterSlide,
            "combo" => Category::Combo,
            _ => Category::Other,
        }
    }

    /// Raw snake_case tag as stored in the feed
    pub fn tag(&self) -> &'static str {
        match self {
            Category::BounceHouse => "bounce_house",
            Category::WaterSlide => "water_slide",
            Category::Combo => "combo",
            Category::Other => "other",
        }
    }

    /// Human form: underscores to spaces ("bounce house")
    pub fn label(&self) -> String {
        self.tag().replace('_', " ")
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Catalog product record
///
/// Invariant: `actual_size` fits inside `setup_area` in both dimensions
/// and in square footage (the setup area includes clearance).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub category: Category,
    pub setup_area: Footprint,
    pub actual_size: Footprint,
}

impl Product {
    /// Check both footprints before rendering
    ///
    /// Malformed records fail here once, up front, instead of producing
    /// NaN geometry halfway through a draw.
    pub fn validate(&self) -> Result<()> {
        if !self.setup_area.is_well_formed() {
            return Err(YardproofError::InvalidProduct(format!(
                "{}: setup_area has non-positive or non-finite dimensions",
                self.name
            )));
        }
        if !self.actual_size.is_well_formed() {
            return Err(YardproofError::InvalidProduct(format!(
                "{}: actual_size has non-positive or non-finite dimensions",
                self.name
            )));
        }
        Ok(())
    }
}

/// Load a catalog from a products.json file
pub fn load_catalog(path: &Path) -> Result<Vec<Product>> {
    if !path.exists() {
        return Err(YardproofError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let products: Vec<Product> = serde_json::from_str(&content)?;
    Ok(products)
}

/// A product that fits a yard, with how much of the yard it uses
#[derive(Debug, Clone)]
pub struct FitResult<'a> {
    pub product: &'a Product,
    /// Setup area as a percentage of the yard area
    pub percent_used: f64,
}

/// Products whose setup area fits a yard, best fit (smallest) first
pub fn find_fitting(catalog: &[Product], yard_length: f64, yard_width: f64) -> Vec<FitResult<'_>> {
    let yard_area = yard_length * yard_width;
    let mut fitting: Vec<FitResult<'_>> = catalog
        .iter()
        .filter(|p| p.setup_area.length <= yard_length && p.setup_area.width <= yard_width)
        .map(|product| FitResult {
            product,
            percent_used: product.setup_area.sq_ft / yard_area * 100.0,
        })
        .collect();
    fitting.sort_by(|a, b| {
        a.product
            .setup_area
            .sq_ft
            .total_cmp(&b.product.setup_area.sq_ft)
    });
    fitting
}

/// Total setup square footage of placed items as a percentage of the yard
pub fn yard_usage(placed: &[&Product], yard_length: f64, yard_width: f64) -> f64 {
    let yard_area = yard_length * yard_width;
    if yard_area <= 0.0 {
        return 0.0;
    }
    let used: f64 = placed.iter().map(|p| p.setup_area.sq_ft).sum();
    used / yard_area * 100.0
}
