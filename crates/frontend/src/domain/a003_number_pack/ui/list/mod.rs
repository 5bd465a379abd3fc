pub mod state;

use self::state::{create_state, PAGE_SIZE};
use super::details::NumberPackDetails;
use crate::shared::api_utils::{delete_json, get_json};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::date_input::DateInput;
use crate::shared::icons::icon;
use crate::shared::infinite_scroll::InfiniteScrollSentinel;
use crate::shared::list_session::ListSession;
use crate::shared::list_utils::{filter_list, format_amount, SearchInput};
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a003_number_pack::aggregate::NumberPack;
use contracts::enums::pack_status::PackStatus;
use contracts::shared::page::Page;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn NumberPackList() -> impl IntoView {
    let state = create_state();
    let session: RwSignal<ListSession<NumberPack>> = RwSignal::new(ListSession::new(PAGE_SIZE));
    let categories: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let (notice, set_notice) = signal::<Option<String>>(None);
    let editing = RwSignal::new(None::<Option<String>>);
    let pending_delete = RwSignal::new(None::<NumberPack>);

    let status_filter = RwSignal::new(String::new());
    let category_filter = RwSignal::new(String::new());

    let load = move |resync: bool| {
        let mut ticket = None;
        session.update(|s| ticket = s.begin_fetch(resync));
        let Some(ticket) = ticket else {
            return;
        };

        let s = state.get_untracked();
        let mut url = format!("/api/number_pack/list?page_size={}", PAGE_SIZE);
        if let Some(cursor) = &ticket.cursor {
            url.push_str(&format!("&cursor={}", cursor));
        }
        if !s.status_filter.is_empty() {
            url.push_str(&format!("&status={}", s.status_filter));
        }
        if !s.category_filter.is_empty() {
            url.push_str(&format!("&category={}", s.category_filter));
        }
        if !s.date_from.is_empty() {
            url.push_str(&format!("&date_from={}", s.date_from));
        }
        if !s.date_to.is_empty() {
            url.push_str(&format!("&date_to={}", s.date_to));
        }

        spawn_local(async move {
            match get_json::<Page<NumberPack>>(&url).await {
                Ok(page) => {
                    session.update(|s| {
                        s.apply_page(&ticket, page.items, page.next_cursor);
                    });
                }
                Err(e) => {
                    session.update(|s| {
                        s.apply_error(&ticket, e);
                    });
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            state.update(|s| s.is_loaded = true);
            load(true);
            spawn_local(async move {
                match get_json::<Vec<Category>>("/api/category").await {
                    Ok(list) => categories.set(list),
                    Err(e) => log::warn!("Failed to load categories: {e}"),
                }
            });
        }
    });

    let visible = Signal::derive(move || {
        let search = state.with(|s| s.search.clone());
        session.with(|s| filter_list(s.items(), &search))
    });
    let loading = Signal::derive(move || session.with(|s| s.is_loading()));
    let has_more = Signal::derive(move || session.with(|s| s.has_more()));
    let sentinel_active = Signal::derive(move || has_more.get() && !loading.get());
    let load_error = Signal::derive(move || session.with(|s| s.error().map(String::from)));
    let loaded_count = Signal::derive(move || session.with(|s| s.len()));

    let apply_filters = move |_| {
        state.update(|s| {
            s.status_filter = status_filter.get_untracked();
            s.category_filter = category_filter.get_untracked();
        });
        load(true);
    };

    let confirm_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|p| format!("Delete pack '{}'? This cannot be undone.", p.name))
    });

    let do_delete = move |_: ()| {
        let Some(pack) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        let id = pack.id.value().to_string();
        spawn_local(async move {
            match delete_json(&format!("/api/number_pack/{}", id)).await {
                Ok(()) => {
                    session.update(|s| {
                        s.remove(&id);
                    });
                }
                Err(e) => set_notice.set(Some(format!("Delete failed: {}", e))),
            }
        });
    };

    let on_saved = Callback::new(move |_: ()| {
        editing.set(None);
        load(true);
    });
    let on_cancel = Callback::new(move |_: ()| editing.set(None));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Number Packs"</h1>
                    <span class="badge badge--primary">{move || loaded_count.get()}</span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(None))
                    >
                        {icon("plus")}
                        " New pack"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Filters"</span>
                        </div>

                        <div class="filter-panel-header__center">
                            <SearchInput
                                value=Signal::derive(move || state.get().search)
                                on_change=Callback::new(move |value| {
                                    state.update(|s| s.search = value)
                                })
                                placeholder="Search pack name or number..."
                            />
                        </div>

                        <div class="filter-panel-header__right">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=apply_filters
                                disabled=Signal::derive(move || loading.get())
                            >
                                {move || if loading.get() { "Loading..." } else { "Apply" }}
                            </Button>
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div class="filter-field">
                                <label>"Status:"</label>
                                <select
                                    prop:value=move || status_filter.get()
                                    on:change=move |ev| {
                                        status_filter.set(event_target_value(&ev));
                                    }
                                >
                                    <option value="">"All"</option>
                                    {PackStatus::all()
                                        .into_iter()
                                        .map(|s| view! {
                                            <option value=s.code()>{s.display_name()}</option>
                                        })
                                        .collect_view()}
                                </select>
                            </div>

                            <div class="filter-field">
                                <label>"Category:"</label>
                                <select
                                    prop:value=move || category_filter.get()
                                    on:change=move |ev| {
                                        category_filter.set(event_target_value(&ev));
                                    }
                                >
                                    <option value="">"All"</option>
                                    {move || categories
                                        .get()
                                        .into_iter()
                                        .map(|c| view! {
                                            <option value=c.slug.clone()>{c.name.clone()}</option>
                                        })
                                        .collect_view()}
                                </select>
                            </div>

                            <div class="filter-field">
                                <label>"Listed:"</label>
                                <DateInput
                                    value=Signal::derive(move || state.get().date_from)
                                    on_change=Callback::new(move |val| {
                                        state.update(|s| s.date_from = val)
                                    })
                                />
                                <span>"—"</span>
                                <DateInput
                                    value=Signal::derive(move || state.get().date_to)
                                    on_change=Callback::new(move |val| {
                                        state.update(|s| s.date_to = val)
                                    })
                                />
                            </div>
                        </Flex>
                    </div>
                </div>

                {move || load_error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}
                {move || notice.get().map(|msg| view! {
                    <div class="alert alert--error" on:click=move |_| set_notice.set(None)>
                        {msg}
                    </div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; font-size: 0.9em;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Numbers"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Price"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|item| item.id.value().to_string()
                                children=move |item| {
                                    let id = item.id.value().to_string();
                                    let status = item.status;
                                    let numbers_preview = item.numbers.join(", ");
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
                                                <TableCellLayout truncate=true>
                                                    {numbers_preview}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {item.category_slug.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="table__amount">
                                                        {format_amount(item.price)}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=format!(
                                                        "badge badge--{}",
                                                        status.code()
                                                    )>
                                                        {status.display_name()}
                                                    </span>
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

                    <InfiniteScrollSentinel
                        active=sentinel_active
                        on_visible=Callback::new(move |_| load(false))
                    />

                    <div class="table-footer">
                        {move || {
                            if loading.get() {
                                view! { <span>"Loading..."</span> }.into_any()
                            } else if !has_more.get() && loaded_count.get() > 0 {
                                view! { <span class="table-footer__done">"All records loaded"</span> }
                                    .into_any()
                            } else {
                                view! { <></> }.into_any()
                            }
                        }}
                    </div>
                </div>
            </div>

            {move || editing.get().map(|id| view! {
                <div class="details-overlay">
                    <NumberPackDetails
                        id=id
                        categories=categories
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
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
