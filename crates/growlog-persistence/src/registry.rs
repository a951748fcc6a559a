//! Static registry of every record type served by the API.
//!
//! One descriptor per table drives payload shaping, handler dispatch and the
//! dependent-reference check performed before a delete. Adding a record type
//! means adding an entity module, a descriptor here and a dispatch arm in
//! [`crate::store`]; the handlers never change.

use std::fmt;

/// Primitive type of a payload field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
    Text,
    Date,
    Boolean,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Text => "string",
            FieldKind::Date => "date (YYYY-MM-DD)",
            FieldKind::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// One recognized payload field. The primary key is not listed here; it is
/// named by [`RecordDescriptor::primary_key`].
#[derive(Debug)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// A foreign-key reference held by another record type against this one.
#[derive(Debug)]
pub struct ReferencedBy {
    /// Route segment of the dependent record type.
    pub record: &'static str,
    /// Column on the dependent table holding the reference.
    pub column: &'static str,
}

/// Everything the generic handlers need to know about one record type.
#[derive(Debug)]
pub struct RecordDescriptor {
    /// Path segment in `/{segment}/{id}` routes, equal to the table name.
    pub segment: &'static str,
    pub table: &'static str,
    /// Name used in caller-facing messages ("Seed not found").
    pub display_name: &'static str,
    pub primary_key: &'static str,
    pub fields: &'static [FieldDef],
    /// Record types holding a foreign key against this one; a delete is
    /// refused while any matching dependent row exists.
    pub referenced_by: &'static [ReferencedBy],
}

const fn required(name: &'static str, kind: FieldKind) -> FieldDef {
    FieldDef {
        name,
        kind,
        required: true,
    }
}

const fn optional(name: &'static str, kind: FieldKind) -> FieldDef {
    FieldDef {
        name,
        kind,
        required: false,
    }
}

const fn referenced_by(record: &'static str, column: &'static str) -> ReferencedBy {
    ReferencedBy { record, column }
}

use FieldKind::{Boolean, Date, Float, Integer, Text};

pub const SEEDS: RecordDescriptor = RecordDescriptor {
    segment: "seeds",
    table: "seeds",
    display_name: "Seed",
    primary_key: "seed_id",
    fields: &[
        required("species", Text),
        required("variety", Text),
        required("number_of_seeds", Integer),
        optional("heirloom", Boolean),
        optional("yield_id", Integer),
        optional("comments", Text),
    ],
    referenced_by: &[referenced_by("germinations", "seed_id")],
};

pub const GERMINATIONS: RecordDescriptor = RecordDescriptor {
    segment: "germinations",
    table: "germinations",
    display_name: "Germination",
    primary_key: "germination_id",
    fields: &[
        required("seed_id", Integer),
        required("planted_date", Date),
        optional("germination_date", Date),
        required("seeds_attempted", Integer),
        required("seeds_successful", Integer),
        required("method", Text),
        optional("comments", Text),
    ],
    referenced_by: &[referenced_by("plants", "germination_id")],
};

pub const PLANTS: RecordDescriptor = RecordDescriptor {
    segment: "plants",
    table: "plants",
    display_name: "Plant",
    primary_key: "plant_id",
    fields: &[
        required("germination_id", Integer),
        optional("hydroponic_system_id", Integer),
        optional("planted_date", Date),
        optional("death_date", Date),
        optional("comments", Text),
    ],
    referenced_by: &[
        referenced_by("plant_plant_crosses", "plant_id"),
        referenced_by("yields", "plant_id"),
        referenced_by("taste_tests", "plant_id"),
        referenced_by("observations", "plant_id"),
    ],
};

pub const HYDROPONIC_SYSTEMS: RecordDescriptor = RecordDescriptor {
    segment: "hydroponic_systems",
    table: "hydroponic_systems",
    display_name: "HydroponicSystem",
    primary_key: "system_id",
    fields: &[required("system_type", Text), optional("comments", Text)],
    referenced_by: &[
        referenced_by("plants", "hydroponic_system_id"),
        referenced_by("hydroponic_conditions", "system_id"),
    ],
};

pub const HYDROPONIC_CONDITIONS: RecordDescriptor = RecordDescriptor {
    segment: "hydroponic_conditions",
    table: "hydroponic_conditions",
    display_name: "HydroponicCondition",
    primary_key: "condition_id",
    fields: &[
        required("system_id", Integer),
        required("date", Date),
        required("water_ph", Float),
        required("electrical_conductivity", Float),
        required("water_temperature_f", Integer),
        optional("tds", Float),
        optional("comments", Text),
    ],
    referenced_by: &[],
};

pub const PLANT_CROSSES: RecordDescriptor = RecordDescriptor {
    segment: "plant_crosses",
    table: "plant_crosses",
    display_name: "PlantCross",
    primary_key: "cross_id",
    fields: &[
        required("cross_date", Date),
        required("pollination_method", Text),
        optional("comments", Text),
    ],
    referenced_by: &[
        referenced_by("plant_plant_crosses", "cross_id"),
        referenced_by("yields", "cross_id"),
    ],
};

pub const PLANT_PLANT_CROSSES: RecordDescriptor = RecordDescriptor {
    segment: "plant_plant_crosses",
    table: "plant_plant_crosses",
    display_name: "PlantPlantCross",
    primary_key: "id",
    fields: &[
        required("plant_id", Integer),
        required("cross_id", Integer),
        required("role", Text),
    ],
    referenced_by: &[],
};

pub const YIELDS: RecordDescriptor = RecordDescriptor {
    segment: "yields",
    table: "yields",
    display_name: "Yield",
    primary_key: "yield_id",
    fields: &[
        required("plant_id", Integer),
        optional("cross_id", Integer),
        required("date", Date),
        required("color", Text),
        required("texture", Text),
        optional("notes", Text),
    ],
    referenced_by: &[referenced_by("seeds", "yield_id")],
};

pub const TASTE_TESTS: RecordDescriptor = RecordDescriptor {
    segment: "taste_tests",
    table: "taste_tests",
    display_name: "TasteTest",
    primary_key: "taste_test_id",
    fields: &[
        required("plant_id", Integer),
        required("date", Date),
        required("taste", Text),
        required("texture", Text),
        required("appearance", Text),
        required("overall", Integer),
        optional("comments", Text),
    ],
    referenced_by: &[],
};

pub const OBSERVATIONS: RecordDescriptor = RecordDescriptor {
    segment: "observations",
    table: "observations",
    display_name: "Observation",
    primary_key: "observation_id",
    fields: &[
        required("plant_id", Integer),
        required("date", Date),
        optional("height_cm", Float),
        optional("leaf_count", Integer),
        optional("color", Text),
        optional("texture", Text),
        optional("comments", Text),
    ],
    referenced_by: &[],
};

/// All record types, in the order the API documents them.
pub const DESCRIPTORS: &[&RecordDescriptor] = &[
    &SEEDS,
    &GERMINATIONS,
    &PLANTS,
    &HYDROPONIC_SYSTEMS,
    &HYDROPONIC_CONDITIONS,
    &PLANT_CROSSES,
    &PLANT_PLANT_CROSSES,
    &YIELDS,
    &TASTE_TESTS,
    &OBSERVATIONS,
];

/// Resolve a route segment to its descriptor.
pub fn lookup(segment: &str) -> Option<&'static RecordDescriptor> {
    DESCRIPTORS.iter().find(|d| d.segment == segment).copied()
}
