use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use sea_orm::Iterable;
use serde::{Deserialize, Serialize};

/// Trades a worker can register under. Stored and sent by their camelCase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "camelCase")]
pub enum ServiceCategory {
    #[sea_orm(string_value = "carpenter")]
    Carpenter,
    #[sea_orm(string_value = "plumber")]
    Plumber,
    #[sea_orm(string_value = "electrician")]
    Electrician,
    #[sea_orm(string_value = "painter")]
    Painter,
    #[sea_orm(string_value = "dailyLabour")]
    DailyLabour,
    #[sea_orm(string_value = "cleaning")]
    Cleaning,
    #[sea_orm(string_value = "makeupArtist")]
    MakeupArtist,
    #[sea_orm(string_value = "locksmith")]
    Locksmith,
    #[sea_orm(string_value = "carMechanic")]
    CarMechanic,
}

impl ServiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Carpenter => "carpenter",
            ServiceCategory::Plumber => "plumber",
            ServiceCategory::Electrician => "electrician",
            ServiceCategory::Painter => "painter",
            ServiceCategory::DailyLabour => "dailyLabour",
            ServiceCategory::Cleaning => "cleaning",
            ServiceCategory::MakeupArtist => "makeupArtist",
            ServiceCategory::Locksmith => "locksmith",
            ServiceCategory::CarMechanic => "carMechanic",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceCategory::iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("Unknown service '{}'", s))
    }
}

/// Workers are created `pending`; no approval transition exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum WorkerStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "worker")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: ServiceCategory,
    pub location: String,
    pub full_address: String,
    pub pincode: String,
    pub experience: Option<String>,
    pub per_day_charges: f64,
    pub description: Option<String>,
    pub status: WorkerStatus,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
