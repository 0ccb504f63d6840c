use crate::error::AppResult;
use serde::Serialize;
use server::color::Color;
use server::theme::{Appearance, DerivedColors};

#[derive(Debug, Serialize)]
pub struct DeriveOutput {
    /// Base color as hex
    pub base: String,
    pub appearance: Appearance,
    pub colors: DerivedColors,
}

#[derive(Debug, Serialize)]
pub struct LabOutput {
    pub color: String,
    pub lab: [i32; 3],
}

pub fn derive(color: &str, light: bool) -> AppResult<DeriveOutput> {
    let base = Color::parse(color)?;
    let appearance = Appearance::from_dark(!light);
    log::debug!("Deriving {appearance:?} colors from {base}");

    Ok(DeriveOutput {
        base: base.to_hex(),
        appearance,
        colors: DerivedColors::from_color(&base, appearance),
    })
}

pub fn lab(color: &str) -> AppResult<LabOutput> {
    let color = Color::parse(color)?;
    Ok(LabOutput {
        color: color.to_hex(),
        lab: color.to_lab(),
    })
}
