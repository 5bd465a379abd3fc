use super::model;
use contracts::domain::a002_vip_number::aggregate::normalize_number;
use contracts::domain::a003_number_pack::aggregate::NumberPackDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the number pack details form
#[derive(Clone, Copy)]
pub struct NumberPackDetailsViewModel {
    pub form: RwSignal<NumberPackDto>,
    /// One number per line in the textarea
    pub numbers_input: RwSignal<String>,
    /// Whole rupees, converted on save
    pub price_input: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl NumberPackDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(NumberPackDto::default()),
            numbers_input: RwSignal::new(String::new()),
            price_input: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.get().id.is_some()
    }

    fn parse_numbers(raw: &str) -> Vec<String> {
        raw.lines()
            .map(normalize_number)
            .filter(|n| !n.is_empty())
            .collect()
    }

    fn validate_form(dto: &NumberPackDto) -> Result<(), String> {
        if dto.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if dto.numbers.len() < 2 {
            return Err("A pack needs at least two numbers (one per line)".into());
        }
        for number in &dto.numbers {
            if !(7..=15).contains(&number.len()) {
                return Err(format!(
                    "Number '{}' must contain between 7 and 15 digits",
                    number
                ));
            }
        }
        if dto.price <= 0 {
            return Err("Price must be greater than zero".into());
        }
        Ok(())
    }

    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        let form = self.form;
        let numbers_input = self.numbers_input;
        let price_input = self.price_input;
        let error = self.error;
        spawn_local(async move {
            match model::fetch_by_id(existing_id).await {
                Ok(aggregate) => {
                    numbers_input.set(aggregate.numbers.join("\n"));
                    price_input.set((aggregate.price / 100).to_string());
                    form.set(NumberPackDto {
                        id: Some(aggregate.id.value().to_string()),
                        name: aggregate.name,
                        numbers: aggregate.numbers,
                        price: aggregate.price,
                        status: aggregate.status,
                        category_slug: aggregate.category_slug,
                        comment: aggregate.comment,
                    });
                }
                Err(e) => error.set(Some(format!("Failed to load: {}", e))),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let mut current = self.form.get_untracked();
        current.numbers = Self::parse_numbers(&self.numbers_input.get_untracked());

        match self
            .price_input
            .get_untracked()
            .trim()
            .replace(',', "")
            .parse::<i64>()
        {
            Ok(rupees) => current.price = rupees * 100,
            Err(_) => {
                self.error
                    .set(Some("Price must be a whole number of rupees".into()));
                return;
            }
        }

        if let Err(msg) = Self::validate_form(&current) {
            self.error.set(Some(msg));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            match model::save_form(&current).await {
                Ok(()) => {
                    saving.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    error.set(Some(e));
                    saving.set(false);
                }
            }
        });
    }
}

impl Default for NumberPackDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
