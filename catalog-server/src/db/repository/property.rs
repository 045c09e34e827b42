//! Property Repository

use shared::models::Property;

use super::{Repository, TableItem};

const TABLE: &str = "property";

impl TableItem for Property {
    const TABLE: &'static str = TABLE;
}

pub type PropertyRepository = Repository<Property>;
