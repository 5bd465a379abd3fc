use super::details::CategoryDetails;
use crate::shared::api_utils::{delete_json, get_json};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::icons::icon;
use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Categories are a small reference collection; the whole list is loaded
/// in one request, no paging
#[component]
pub fn CategoryList() -> impl IntoView {
    let items: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let editing = RwSignal::new(None::<Option<String>>);
    let pending_delete = RwSignal::new(None::<Category>);
    let loaded_once = StoredValue::new(false);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match get_json::<Vec<Category>>("/api/category").await {
                Ok(list) => items.set(list),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !loaded_once.get_value() {
            loaded_once.set_value(true);
            load();
        }
    });

    let confirm_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|c| format!("Delete category '{}'? This cannot be undone.", c.name))
    });

    let do_delete = move |_: ()| {
        let Some(category) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        let id = category.id.value().to_string();
        spawn_local(async move {
            match delete_json(&format!("/api/category/{}", id)).await {
                Ok(()) => {
                    items.update(|list| {
                        list.retain(|c| c.id.value().to_string() != id);
                    });
                }
                Err(e) => set_error.set(Some(format!("Delete failed: {}", e))),
            }
        });
    };

    let on_saved = Callback::new(move |_: ()| {
        editing.set(None);
        load();
    });
    let on_cancel = Callback::new(move |_: ()| editing.set(None));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Categories"</h1>
                    <span class="badge badge--primary">{move || items.get().len()}</span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(None))
                    >
                        {icon("plus")}
                        " New category"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; font-size: 0.9em;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Slug"</TableHeaderCell>
                                <TableHeaderCell>"Comment"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|item| item.id.value().to_string()
                                children=move |item| {
                                    let id = item.id.value().to_string();
                                    let item_for_delete = item.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click={
                                                            let id = id.clone();
                                                            move |e: leptos::ev::MouseEvent| {
                                                                e.prevent_default();
                                                                editing.set(Some(Some(id.clone())));
                                                            }
                                                        }
                                                    >
                                                        {item.name.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <code>{item.slug.clone()}</code>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item.comment.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <button
                                                        class="table__action table__action--danger"
                                                        on:click=move |_| {
                                                            pending_delete
                                                                .set(Some(item_for_delete.clone()))
                                                        }
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || editing.get().map(|id| view! {
                <div class="details-overlay">
                    <CategoryDetails id=id on_saved=on_saved on_cancel=on_cancel />
                </div>
            })}

            <ConfirmDialog
                message=confirm_message
                on_confirm=Callback::new(do_delete)
                on_cancel=Callback::new(move |_: ()| pending_delete.set(None))
            />
        </div>
    }
}
