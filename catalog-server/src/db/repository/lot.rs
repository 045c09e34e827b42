//! Lot Development Repository

use shared::models::LotDevelopment;

use super::{Repository, TableItem};

impl TableItem for LotDevelopment {
    const TABLE: &'static str = "lot";
}

pub type LotRepository = Repository<LotDevelopment>;
