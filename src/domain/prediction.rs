//! Sector/technology predictions and the fixed catalogs they are drawn from.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::AppError;

/// Industries a prediction can be about.
pub const SECTORS: &[&str] = &[
    "Healthcare",
    "Education",
    "Agriculture",
    "Urban Mobility",
    "Renewable Energy",
    "Finance",
    "Manufacturing",
    "Logistics",
    "Public Health",
    "Ocean Conservation",
    "Space Exploration",
    "Retail",
    "Architecture",
    "Journalism",
    "Mental Health",
    "Water Management",
    "Disaster Response",
    "Elder Care",
    "Fashion",
    "Food Security",
    "Scientific Research",
    "Civic Governance",
];

/// Technologies a prediction credits.
pub const TECHNOLOGIES: &[&str] = &[
    "Quantum Computing",
    "Artificial Intelligence",
    "Gene Editing",
    "Solid-State Batteries",
    "Fusion Power",
    "Robotics",
    "Edge Computing",
    "Synthetic Biology",
    "Augmented Reality",
    "Satellite Internet",
    "Digital Twins",
    "Brain-Computer Interfaces",
    "Carbon Capture",
    "3D Printing",
    "Open-Source Software",
    "Autonomous Drones",
    "Vertical Farming",
    "Smart Materials",
    "Federated Learning",
    "Nanomedicine",
    "Green Hydrogen",
];

/// The (sector, technology) pair currently on display.
///
/// Both fields are non-empty. A prediction is replaced wholesale and never
/// edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    sector: String,
    technology: String,
}

impl Prediction {
    /// Build a prediction from explicit values, rejecting blank fields.
    pub fn new(sector: impl Into<String>, technology: impl Into<String>) -> Result<Self, AppError> {
        let sector = sector.into();
        let technology = technology.into();
        if sector.trim().is_empty() {
            return Err(AppError::InvalidInput("sector must not be empty".into()));
        }
        if technology.trim().is_empty() {
            return Err(AppError::InvalidInput("technology must not be empty".into()));
        }
        Ok(Self { sector, technology })
    }

    /// Draw a sector and a technology uniformly from the catalogs.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let sector = SECTORS.choose(rng).copied().unwrap_or("Healthcare");
        let technology = TECHNOLOGIES.choose(rng).copied().unwrap_or("Quantum Computing");
        Self { sector: sector.to_string(), technology: technology.to_string() }
    }

    pub fn sector(&self) -> &str {
        &self.sector
    }

    pub fn technology(&self) -> &str {
        &self.technology
    }

    /// The headline sentence every prompt and share payload is built around.
    pub fn statement(&self) -> String {
        format!("The future of {} will be bright because of {}.", self.sector, self.technology)
    }
}
