use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Sales agent as stored in the `agents` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Agent {
    pub agent_code: Option<String>,
    pub agent_name: Option<String>,
    pub working_area: Option<String>,
    /// Commission rate, rendered as text (e.g. "0.15")
    pub commission: Option<String>,
    pub phone_no: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Company {
    pub company_id: Option<String>,
    pub company_name: Option<String>,
    pub company_city: Option<String>,
}

/// Customer with its running balances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Customer {
    pub customer_code: Option<String>,
    pub customer_name: Option<String>,
    pub customer_city: Option<String>,
    pub working_area: Option<String>,
    pub customer_country: Option<String>,
    pub grade: Option<String>,
    pub opening_amt: Option<String>,
    pub receive_amt: Option<String>,
    pub payment_amt: Option<String>,
    pub outstanding_amt: Option<String>,
    pub phone_no: Option<String>,
    /// Code of the agent serving this customer
    pub agent_code: Option<String>,
}

/// A row of the `daysorder` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Order {
    pub ord_num: Option<String>,
    pub ord_amount: Option<String>,
    pub advance_amount: Option<String>,
    pub ord_date: Option<String>,
    pub cust_code: Option<String>,
    pub agent_code: Option<String>,
    pub ord_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FoodItem {
    pub item_id: Option<String>,
    pub item_name: Option<String>,
    pub item_unit: Option<String>,
    pub company_id: Option<String>,
}

/// A student joined with their report card on roll id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct StudentReport {
    pub name: Option<String>,
    pub title: Option<String>,
    pub class: Option<String>,
    pub section: Option<String>,
    pub roll_id: Option<String>,
    pub grade: Option<String>,
    pub semester: Option<String>,
    pub class_attended: Option<String>,
}

/// Body of `POST /api/agent`. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAgentRequest {
    pub agent_code: String,
    pub agent_name: String,
    pub working_area: String,
    pub commission: String,
    pub phone_no: String,
    pub country: String,
}

/// Body of `PUT /api/agent?agentCode=...`.
/// Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAgentRequest {
    #[serde(default)]
    pub agent_name: Option<String>,
    #[serde(default)]
    pub working_area: Option<String>,
    #[serde(default)]
    pub commission: Option<String>,
    #[serde(default)]
    pub phone_no: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Body of `PATCH /api/customerByCustomerCode?customerCode=...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    pub customer_name: String,
    pub customer_city: String,
    pub customer_country: String,
}

/// Confirmation returned by successful mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Plain error body (`{"error": "..."}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Where a validated field was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldLocation {
    Body,
    Query,
}

/// A single failed field rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldViolation {
    /// Always "field"
    #[serde(rename = "type")]
    pub kind: String,
    /// The sanitized value that failed, if the field was present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub value: Option<Value>,
    pub msg: String,
    pub path: String,
    pub location: FieldLocation,
}

impl FieldViolation {
    pub fn new(path: &str, location: FieldLocation, value: Option<Value>, msg: &str) -> Self {
        Self {
            kind: "field".to_string(),
            value,
            msg: msg.to_string(),
            path: path.to_string(),
            location,
        }
    }
}

/// 400 body listing every failed field rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldViolation>,
}
