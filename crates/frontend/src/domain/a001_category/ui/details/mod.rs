use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_utils::{get_json, post_json};

async fn fetch_by_id(id: String) -> Result<Category, String> {
    get_json::<Category>(&format!("/api/category/{}", id)).await
}

async fn save_form(dto: &CategoryDto) -> Result<(), String> {
    let _: serde_json::Value = post_json("/api/category", dto).await?;
    Ok(())
}

fn validate_form(dto: &CategoryDto) -> Result<(), String> {
    if dto.name.trim().is_empty() {
        return Err("Name is required".into());
    }
    let slug = dto.slug.trim();
    if slug.is_empty() {
        return Err("Slug is required".into());
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("Slug may only contain lowercase letters, digits and dashes".into());
    }
    Ok(())
}

#[component]
pub fn CategoryDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(CategoryDto::default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    if let Some(existing_id) = id {
        spawn_local(async move {
            match fetch_by_id(existing_id).await {
                Ok(category) => form.set(CategoryDto {
                    id: Some(category.id.value().to_string()),
                    slug: category.slug,
                    name: category.name,
                    comment: category.comment,
                }),
                Err(e) => error.set(Some(format!("Failed to load: {}", e))),
            }
        });
    }

    let save = move |_| {
        let current = form.get_untracked();
        if let Err(msg) = validate_form(&current) {
            error.set(Some(msg));
            return;
        }
        saving.set(true);
        spawn_local(async move {
            match save_form(&current).await {
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
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {move || if form.get().id.is_some() { "Edit category" } else { "New category" }}
                </h3>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="category-name">"Name"</label>
                    <input
                        type="text"
                        id="category-name"
                        prop:value=move || form.get().name
                        on:input=move |ev| {
                            form.update(|f| f.name = event_target_value(&ev));
                        }
                        placeholder="Gold numbers"
                    />
                </div>

                <div class="form-group">
                    <label for="category-slug">"Slug"</label>
                    <input
                        type="text"
                        id="category-slug"
                        prop:value=move || form.get().slug
                        on:input=move |ev| {
                            form.update(|f| f.slug = event_target_value(&ev));
                        }
                        placeholder="gold-numbers"
                    />
                </div>

                <div class="form-group">
                    <label for="category-comment">"Comment"</label>
                    <textarea
                        id="category-comment"
                        prop:value=move || form.get().comment.unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                f.comment = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                        rows="3"
                    />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
