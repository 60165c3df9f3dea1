use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Meal,
    Drink,
}

impl EntryType {
    /// Fallback kcal per portion when the form leaves calories unset.
    pub fn default_calories(self) -> u64 {
        match self {
            EntryType::Meal => 550,
            EntryType::Drink => 120,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntryType::Meal => "meal",
            EntryType::Drink => "drink",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub name: String,
    pub quantity: u32,
    pub calories_per_portion: u64,
    pub total_calories: u64,
    pub image_data_url: String,
    pub created_at: String,
}

impl Entry {
    pub fn from_request(request: NewEntryRequest, id: String, created_at: String) -> Self {
        let calories_per_portion = match request.calories_per_portion {
            Some(value) if value > 0 => value,
            _ => request.entry_type.default_calories(),
        };
        let total_calories = calories_per_portion.saturating_mul(u64::from(request.quantity));
        let name = match request.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Untitled {}", request.entry_type.label()),
        };

        Self {
            id,
            date: request.date,
            entry_type: request.entry_type,
            name,
            quantity: request.quantity,
            calories_per_portion,
            total_calories,
            image_data_url: request.image_data_url,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Journal {
    pub entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
pub struct NewEntryRequest {
    pub date: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default)]
    pub name: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub calories_per_portion: Option<u64>,
    pub image_data_url: String,
}

#[derive(Debug, Deserialize)]
pub struct TotalQuery {
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DailyTotalResponse {
    pub date: String,
    pub total_calories: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(entry_type: EntryType) -> NewEntryRequest {
        NewEntryRequest {
            date: "2024-01-01".to_string(),
            entry_type,
            name: None,
            quantity: 1,
            calories_per_portion: None,
            image_data_url: "data:image/png;base64,AAAA".to_string(),
        }
    }

    #[test]
    fn meal_without_calories_uses_default_estimate() {
        let entry = Entry::from_request(request(EntryType::Meal), "id".into(), "now".into());
        assert_eq!(entry.calories_per_portion, 550);
        assert_eq!(entry.total_calories, 550);
    }

    #[test]
    fn drink_without_calories_uses_default_estimate() {
        let entry = Entry::from_request(request(EntryType::Drink), "id".into(), "now".into());
        assert_eq!(entry.calories_per_portion, 120);
        assert_eq!(entry.total_calories, 120);
    }

    #[test]
    fn zero_calories_falls_back_to_default() {
        let mut req = request(EntryType::Meal);
        req.calories_per_portion = Some(0);
        let entry = Entry::from_request(req, "id".into(), "now".into());
        assert_eq!(entry.calories_per_portion, 550);
    }

    #[test]
    fn total_multiplies_portion_by_quantity() {
        let mut req = request(EntryType::Meal);
        req.quantity = 3;
        req.calories_per_portion = Some(400);
        let entry = Entry::from_request(req, "id".into(), "now".into());
        assert_eq!(entry.total_calories, 1200);
    }

    #[test]
    fn blank_name_falls_back_to_untitled() {
        let mut req = request(EntryType::Drink);
        req.name = Some("   ".to_string());
        let entry = Entry::from_request(req, "id".into(), "now".into());
        assert_eq!(entry.name, "Untitled drink");
    }

    #[test]
    fn given_name_is_trimmed_and_kept() {
        let mut req = request(EntryType::Meal);
        req.name = Some("  Salad ".to_string());
        let entry = Entry::from_request(req, "id".into(), "now".into());
        assert_eq!(entry.name, "Salad");
    }
}
