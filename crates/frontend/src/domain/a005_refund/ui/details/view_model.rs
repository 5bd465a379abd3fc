use super::model;
use contracts::domain::a005_refund::aggregate::RefundDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the refund details form
#[derive(Clone, Copy)]
pub struct RefundDetailsViewModel {
    pub form: RwSignal<RefundDto>,
    /// Whole rupees, converted on save
    pub price_input: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl RefundDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(RefundDto::default()),
            price_input: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.get().id.is_some()
    }

    fn validate_form(dto: &RefundDto) -> Result<(), String> {
        if dto.payment_ref.trim().is_empty() {
            return Err("Payment reference is required".into());
        }
        if dto.amount <= 0 {
            return Err("Amount must be greater than zero".into());
        }
        if !dto.email.trim().is_empty() && !dto.email.contains('@') {
            return Err("E-mail address is malformed".into());
        }
        Ok(())
    }

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
                    price_input.set((aggregate.amount / 100).to_string());
                    form.set(RefundDto {
                        id: Some(aggregate.id.value().to_string()),
                        refund_ref: aggregate.refund_ref,
                        payment_ref: aggregate.payment_ref,
                        order_ref: aggregate.order_ref,
                        email: aggregate.email,
                        amount: aggregate.amount,
                        status: aggregate.status,
                        reason: aggregate.reason,
                    });
                }
                Err(e) => error.set(Some(format!("Failed to load: {}", e))),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let mut current = self.form.get_untracked();

        match self
            .price_input
            .get_untracked()
            .trim()
            .replace(',', "")
            .parse::<i64>()
        {
            Ok(rupees) => current.amount = rupees * 100,
            Err(_) => {
                self.error
                    .set(Some("Amount must be a whole number of rupees".into()));
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

impl Default for RefundDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
