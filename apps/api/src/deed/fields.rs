//! The 24 mandatory form fields of a device sale deed.

use serde::Deserialize;

/// Form data for one sale-deed generation request. All fields are mandatory;
/// they default to empty strings on deserialization so that validation — not
/// serde — reports which field is missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaleDeedFields {
    pub execution_day: String,
    pub execution_month: String,
    pub execution_place: String,
    pub seller_name: String,
    pub seller_father_name: String,
    pub seller_address: String,
    pub seller_aadhaar: String,
    pub buyer_name: String,
    pub buyer_father_name: String,
    pub buyer_address: String,
    pub buyer_aadhaar: String,
    pub device_model: String,
    pub serial_number: String,
    pub device_color: String,
    pub storage_capacity: String,
    pub sale_price_in_words: String,
    pub sale_price_in_figures: String,
    pub payment_mode: String,
    pub bank_name: String,
    pub account_holder_name: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub accessories_list: String,
    pub documents_list: String,
}

impl SaleDeedFields {
    /// Returns the wire name of the first missing field, in declaration
    /// order, or `None` when all 24 are present. A whitespace-only value
    /// counts as missing.
    pub fn first_missing(&self) -> Option<&'static str> {
        self.named_values()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
    }

    /// All fields paired with their wire (camelCase) names, in the order
    /// validation reports them.
    fn named_values(&self) -> [(&'static str, &str); 24] {
        [
            ("executionDay", &self.execution_day),
            ("executionMonth", &self.execution_month),
            ("executionPlace", &self.execution_place),
            ("sellerName", &self.seller_name),
            ("sellerFatherName", &self.seller_father_name),
            ("sellerAddress", &self.seller_address),
            ("sellerAadhaar", &self.seller_aadhaar),
            ("buyerName", &self.buyer_name),
            ("buyerFatherName", &self.buyer_father_name),
            ("buyerAddress", &self.buyer_address),
            ("buyerAadhaar", &self.buyer_aadhaar),
            ("deviceModel", &self.device_model),
            ("serialNumber", &self.serial_number),
            ("deviceColor", &self.device_color),
            ("storageCapacity", &self.storage_capacity),
            ("salePriceInWords", &self.sale_price_in_words),
            ("salePriceInFigures", &self.sale_price_in_figures),
            ("paymentMode", &self.payment_mode),
            ("bankName", &self.bank_name),
            ("accountHolderName", &self.account_holder_name),
            ("accountNumber", &self.account_number),
            ("ifscCode", &self.ifsc_code),
            ("accessoriesList", &self.accessories_list),
            ("documentsList", &self.documents_list),
        ]
    }
}

#[cfg(test)]
impl SaleDeedFields {
    /// Fully populated fixture shared by this module's and the handler tests.
    pub(crate) fn sample() -> SaleDeedFields {
        SaleDeedFields {
            execution_day: "14th".to_string(),
            execution_month: "August 2025".to_string(),
            execution_place: "Pune".to_string(),
            seller_name: "Rohan Mehta".to_string(),
            seller_father_name: "Suresh Mehta".to_string(),
            seller_address: "12 MG Road, Pune 411001".to_string(),
            seller_aadhaar: "1234 5678 9012".to_string(),
            buyer_name: "Anita Desai".to_string(),
            buyer_father_name: "Vikram Desai".to_string(),
            buyer_address: "48 FC Road, Pune 411004".to_string(),
            buyer_aadhaar: "9876 5432 1098".to_string(),
            device_model: "Pixel 8 Pro".to_string(),
            serial_number: "GP8P-2291-XK".to_string(),
            device_color: "Obsidian".to_string(),
            storage_capacity: "256 GB".to_string(),
            sale_price_in_words: "Forty Five Thousand Rupees".to_string(),
            sale_price_in_figures: "45,000".to_string(),
            payment_mode: "bank transfer".to_string(),
            bank_name: "State Bank of India".to_string(),
            account_holder_name: "Anita Desai".to_string(),
            account_number: "3011 4455 6677".to_string(),
            ifsc_code: "SBIN0001234".to_string(),
            accessories_list: "charger, USB-C cable, original box".to_string(),
            documents_list: "purchase invoice, warranty card".to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_fields() -> SaleDeedFields {
        SaleDeedFields::sample()
    }

    #[test]
    fn test_complete_fields_pass_validation() {
        assert_eq!(complete_fields().first_missing(), None);
    }

    #[test]
    fn test_absent_field_is_reported_by_wire_name() {
        let mut fields = complete_fields();
        fields.buyer_aadhaar = String::new();
        assert_eq!(fields.first_missing(), Some("buyerAadhaar"));
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut fields = complete_fields();
        fields.ifsc_code = "   ".to_string();
        assert_eq!(fields.first_missing(), Some("ifscCode"));
    }

    #[test]
    fn test_first_missing_follows_declaration_order() {
        let mut fields = complete_fields();
        fields.seller_name = String::new();
        fields.documents_list = String::new();
        assert_eq!(fields.first_missing(), Some("sellerName"));
    }

    #[test]
    fn test_deserializes_camel_case_with_defaults() {
        let fields: SaleDeedFields =
            serde_json::from_str(r#"{"sellerName": "Rohan Mehta"}"#).unwrap();
        assert_eq!(fields.seller_name, "Rohan Mehta");
        // Everything else defaulted to empty — first gap is executionDay.
        assert_eq!(fields.first_missing(), Some("executionDay"));
    }
}
