use super::model;
use contracts::domain::a002_vip_number::aggregate::{normalize_number, VipNumberDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the VIP number details form
#[derive(Clone, Copy)]
pub struct VipNumberDetailsViewModel {
    pub form: RwSignal<VipNumberDto>,
    /// Price entered in whole rupees; converted to minor units on save
    pub price_input: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl VipNumberDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(VipNumberDto::default()),
            price_input: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.get().id.is_some()
    }

    fn validate_form(dto: &VipNumberDto) -> Result<(), String> {
        let digits = normalize_number(&dto.number);
        if digits.is_empty() {
            return Err("Number is required".into());
        }
        if !(7..=15).contains(&digits.len()) {
            return Err("Number must contain between 7 and 15 digits".into());
        }
        if dto.price <= 0 {
            return Err("Price must be greater than zero".into());
        }
        Ok(())
    }

    fn parse_price(raw: &str) -> Result<i64, String> {
        let rupees: i64 = raw
            .trim()
            .replace(',', "")
            .parse()
            .map_err(|_| "Price must be a whole number of rupees".to_string())?;
        Ok(rupees * 100)
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        let form = self.form;
        let price_input = self.price_input;
        let error = self.error;
        spawn_local(async move {
            match model::fetch_by_id(existing_id).await {
                Ok(aggregate) => {
                    price_input.set((aggregate.price / 100).to_string());
                    form.set(VipNumberDto {
                        id: Some(aggregate.id.value().to_string()),
                        number: aggregate.number,
                        price: aggregate.price,
                        status: aggregate.status,
                        category_slug: aggregate.category_slug,
                        highlight: aggregate.highlight,
                        comment: aggregate.comment,
                    });
                }
                Err(e) => error.set(Some(format!("Failed to load: {}", e))),
            }
        });
    }

    /// Validate, run the duplicate pre-check, then save.
    ///
    /// The duplicate check is a read: if another live record already holds
    /// the normalized number, the write is rejected right here and no save
    /// request is issued.
    pub fn save_command(&self, on_saved: Callback<()>) {
        let mut current = self.form.get_untracked();

        match Self::parse_price(&self.price_input.get_untracked()) {
            Ok(price) => current.price = price,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        }
        current.number = normalize_number(&current.number);

        if let Err(msg) = Self::validate_form(&current) {
            self.error.set(Some(msg));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            match model::lookup_number(&current.number).await {
                Ok(Some(existing))
                    if Some(existing.id.value().to_string()) != current.id =>
                {
                    error.set(Some(format!(
                        "Number {} is already listed",
                        current.number
                    )));
                    saving.set(false);
                    return;
                }
                Ok(_) => {}
                Err(e) => {
                    error.set(Some(format!("Duplicate check failed: {}", e)));
                    saving.set(false);
                    return;
                }
            }

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

impl Default for VipNumberDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
