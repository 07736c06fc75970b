// Catalog, lead, and analytics records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication state of a catalog product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Inactive,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(ProductStatus::Active),
            "inactive" => Some(ProductStatus::Inactive),
            _ => None,
        }
    }
}

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::Active
    }
}

/// Where a lead came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    LandingPage,
    Whatsapp,
    SocialMedia,
    Referral,
}

impl LeadSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::LandingPage => "landing_page",
            LeadSource::Whatsapp => "whatsapp",
            LeadSource::SocialMedia => "social_media",
            LeadSource::Referral => "referral",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "landing_page" => Some(LeadSource::LandingPage),
            "whatsapp" => Some(LeadSource::Whatsapp),
            "social_media" => Some(LeadSource::SocialMedia),
            "referral" => Some(LeadSource::Referral),
            _ => None,
        }
    }
}

/// Pipeline state of a lead
///
/// No transition order is enforced; any status may be set to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Converted => "converted",
            LeadStatus::Lost => "lost",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(LeadStatus::New),
            "contacted" => Some(LeadStatus::Contacted),
            "qualified" => Some(LeadStatus::Qualified),
            "converted" => Some(LeadStatus::Converted),
            "lost" => Some(LeadStatus::Lost),
            _ => None,
        }
    }
}

impl Default for LeadStatus {
    fn default() -> Self {
        LeadStatus::New
    }
}

/// A stored catalog product with bilingual name/description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub name_ar: Option<String>,
    pub description: Option<String>,
    pub description_ar: Option<String>,
    pub price: f64,
    pub original_price: Option<f64>,
    pub offer: Option<String>,
    pub images: Option<Vec<String>>,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating or replacing a product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub name_ar: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub description_ar: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub offer: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub status: ProductStatus,
}

/// A stored sales lead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub product_id: Option<i32>,
    pub source: LeadSource,
    pub status: LeadStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating or replacing a lead
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub product_id: Option<i32>,
    pub source: LeadSource,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A tracked analytics event, write-only from the application's side
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub id: i32,
    pub event_type: String,
    pub product_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when tracking an event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub event_type: String,
    #[serde(default)]
    pub product_id: Option<i32>,
}

impl NewEvent {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            product_id: None,
        }
    }

    pub fn with_product(mut self, product_id: i32) -> Self {
        self.product_id = Some(product_id);
        self
    }
}

/// Lead count per pipeline status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: LeadStatus,
    pub count: i64,
}

/// Lead count per acquisition source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceCount {
    pub source: LeadSource,
    pub count: i64,
}

/// Aggregated dashboard summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_visits: i64,
    pub total_leads: i64,
    pub total_products: i64,
    /// Leads per hundred visits, rounded to one decimal
    pub conversion_rate: f64,
    pub recent_leads: Vec<Lead>,
    pub leads_by_status: Vec<StatusCount>,
    pub leads_by_source: Vec<SourceCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_status_serialization() {
        assert_eq!(
            serde_json::to_string(&ProductStatus::Active).unwrap(),
            r#""active""#
        );
        assert_eq!(
            serde_json::to_string(&ProductStatus::Inactive).unwrap(),
            r#""inactive""#
        );

        let deserialized: ProductStatus = serde_json::from_str(r#""inactive""#).unwrap();
        assert_eq!(deserialized, ProductStatus::Inactive);
    }

    #[test]
    fn test_product_status_parse_round_trip() {
        for status in [ProductStatus::Active, ProductStatus::Inactive] {
            assert_eq!(ProductStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ProductStatus::parse("archived"), None);
    }

    #[test]
    fn test_lead_source_serialization() {
        assert_eq!(
            serde_json::to_string(&LeadSource::LandingPage).unwrap(),
            r#""landing_page""#
        );
        assert_eq!(
            serde_json::to_string(&LeadSource::SocialMedia).unwrap(),
            r#""social_media""#
        );

        let deserialized: LeadSource = serde_json::from_str(r#""whatsapp""#).unwrap();
        assert_eq!(deserialized, LeadSource::Whatsapp);
    }

    #[test]
    fn test_lead_source_parse_round_trip() {
        for source in [
            LeadSource::LandingPage,
            LeadSource::Whatsapp,
            LeadSource::SocialMedia,
            LeadSource::Referral,
        ] {
            assert_eq!(LeadSource::parse(source.as_str()), Some(source));
        }
        assert_eq!(LeadSource::parse("email"), None);
    }

    #[test]
    fn test_lead_status_parse_round_trip() {
        for status in [
            LeadStatus::New,
            LeadStatus::Contacted,
            LeadStatus::Qualified,
            LeadStatus::Converted,
            LeadStatus::Lost,
        ] {
            assert_eq!(LeadStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(LeadStatus::parse("archived"), None);
    }

    #[test]
    fn test_product_wire_field_names() {
        let product = Product {
            id: 1,
            name: "Leather Bag".to_string(),
            name_ar: Some("حقيبة جلدية".to_string()),
            description: None,
            description_ar: None,
            price: 49.5,
            original_price: Some(60.0),
            offer: Some("Free shipping".to_string()),
            images: Some(vec!["img-1.jpg".to_string()]),
            status: ProductStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&product).unwrap()).unwrap();
        assert_eq!(value["nameAr"], "حقيبة جلدية");
        assert_eq!(value["originalPrice"], 60.0);
        assert_eq!(value["status"], "active");
        assert_eq!(value["images"][0], "img-1.jpg");
    }

    #[test]
    fn test_new_product_defaults() {
        let json = r#"{"name":"Mug","price":9.99}"#;
        let new_product: NewProduct = serde_json::from_str(json).unwrap();
        assert_eq!(new_product.name, "Mug");
        assert_eq!(new_product.status, ProductStatus::Active);
        assert!(new_product.name_ar.is_none());
        assert!(new_product.images.is_none());
    }

    #[test]
    fn test_new_lead_defaults() {
        let json = r#"{"name":"Sara","phone":"+201000000000","source":"whatsapp"}"#;
        let new_lead: NewLead = serde_json::from_str(json).unwrap();
        assert_eq!(new_lead.status, LeadStatus::New);
        assert!(new_lead.email.is_none());
        assert!(new_lead.product_id.is_none());
    }

    #[test]
    fn test_lead_round_trip() {
        let lead = Lead {
            id: 7,
            name: "Omar".to_string(),
            phone: "+201111111111".to_string(),
            email: Some("omar@example.com".to_string()),
            product_id: Some(3),
            source: LeadSource::Referral,
            status: LeadStatus::Qualified,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let serialized = serde_json::to_string(&lead).unwrap();
        let deserialized: Lead = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, lead);
    }

    #[test]
    fn test_new_event_builder() {
        let event = NewEvent::new("page_view");
        assert_eq!(event.event_type, "page_view");
        assert!(event.product_id.is_none());

        let event = NewEvent::new("lead_created").with_product(12);
        assert_eq!(event.product_id, Some(12));
    }

    #[test]
    fn test_summary_wire_field_names() {
        let summary = AnalyticsSummary {
            total_visits: 10,
            total_leads: 2,
            total_products: 4,
            conversion_rate: 20.0,
            recent_leads: vec![],
            leads_by_status: vec![StatusCount {
                status: LeadStatus::New,
                count: 2,
            }],
            leads_by_source: vec![SourceCount {
                source: LeadSource::Whatsapp,
                count: 2,
            }],
        };

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&summary).unwrap()).unwrap();
        assert_eq!(value["totalVisits"], 10);
        assert_eq!(value["conversionRate"], 20.0);
        assert_eq!(value["leadsByStatus"][0]["status"], "new");
        assert_eq!(value["leadsBySource"][0]["source"], "whatsapp");
    }
}
