pub mod state;

use self::state::{create_state, PAGE_SIZE};
use super::details::VipNumberDetails;
use crate::shared::api_utils::{delete_json, get_json, post_empty};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::date_input::DateInput;
use crate::shared::icons::icon;
use crate::shared::infinite_scroll::InfiniteScrollSentinel;
use crate::shared::list_session::ListSession;
use crate::shared::list_utils::{filter_list, format_amount, highlight_matches, SearchInput};
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_vip_number::aggregate::VipNumber;
use contracts::enums::vip_number_status::VipNumberStatus;
use contracts::shared::page::Page;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn format_date(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    timestamp.format("%d.%m.%Y").to_string()
}

#[component]
pub fn VipNumberList() -> impl IntoView {
    let state = create_state();
    let session: RwSignal<ListSession<VipNumber>> = RwSignal::new(ListSession::new(PAGE_SIZE));
    let categories: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let (is_filter_expanded, set_is_filter_expanded) = signal(true);
    let (notice, set_notice) = signal::<Option<String>>(None);
    // None = closed, Some(None) = new record, Some(Some(id)) = edit
    let editing = RwSignal::new(None::<Option<String>>);
    let pending_delete = RwSignal::new(None::<VipNumber>);

    // Filter inputs are staged here and committed with Apply
    let status_filter = RwSignal::new(String::new());
    let category_filter = RwSignal::new(String::new());

    let load = move |resync: bool| {
        let mut ticket = None;
        session.update(|s| ticket = s.begin_fetch(resync));
        let Some(ticket) = ticket else {
            return;
        };

        let s = state.get_untracked();
        let mut url = format!("/api/vip_number/list?page_size={}", PAGE_SIZE);
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
            match get_json::<Page<VipNumber>>(&url).await {
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

    let active_filters_count = Signal::derive(move || {
        let s = state.get();
        let mut count = 0;
        if !s.status_filter.is_empty() {
            count += 1;
        }
        if !s.category_filter.is_empty() {
            count += 1;
        }
        if !s.date_from.is_empty() {
            count += 1;
        }
        if !s.date_to.is_empty() {
            count += 1;
        }
        count
    });

    let apply_filters = move |_| {
        state.update(|s| {
            s.status_filter = status_filter.get_untracked();
            s.category_filter = category_filter.get_untracked();
        });
        load(true);
    };

    // Auto-dismissing failure toast for row-level actions
    let show_notice = move |message: String| {
        set_notice.set(Some(message));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(5000).await;
            set_notice.set(None);
        });
    };

    let confirm_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|n| format!("Delete number {}? This cannot be undone.", n.number))
    });

    let do_delete = move |_: ()| {
        let Some(number) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        let id = number.id.value().to_string();
        spawn_local(async move {
            match delete_json(&format!("/api/vip_number/{}", id)).await {
                Ok(()) => {
                    // Optimistic: drop the row locally, no refetch
                    session.update(|s| {
                        s.remove(&id);
                    });
                }
                Err(e) => show_notice(format!("Delete failed: {}", e)),
            }
        });
    };

    let seed_demo_data = move |_| {
        spawn_local(async move {
            match post_empty("/api/vip_number/testdata").await {
                Ok(()) => load(true),
                Err(e) => show_notice(format!("Seeding failed: {}", e)),
            }
        });
    };

    let on_saved = Callback::new(move |_: ()| {
        editing.set(None);
        // Create/update invalidates the whole buffer: resync page one
        load(true);
    });
    let on_cancel = Callback::new(move |_: ()| editing.set(None));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"VIP Numbers"</h1>
                    <span class="badge badge--primary">{move || loaded_count.get()}</span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=seed_demo_data
                    >
                        "Seed demo data"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(None))
                    >
                        {icon("plus")}
                        " New number"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div
                            class="filter-panel-header__left"
                            on:click=move |_| set_is_filter_expanded.update(|e| *e = !*e)
                        >
                            {icon("filter")}
                            <span class="filter-panel__title">"Filters"</span>
                            {move || {
                                let count = active_filters_count.get();
                                if count > 0 {
                                    view! { <span class="filter-panel__badge">{count}</span> }
                                        .into_any()
                                } else {
                                    view! { <></> }.into_any()
                                }
                            }}
                        </div>

                        <div class="filter-panel-header__center">
                            <SearchInput
                                value=Signal::derive(move || state.get().search)
                                on_change=Callback::new(move |value| {
                                    state.update(|s| s.search = value)
                                })
                                placeholder="Search number or highlight..."
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

                    <Show when=move || is_filter_expanded.get()>
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
                                        {VipNumberStatus::all()
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
                    </Show>
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
                                <TableHeaderCell>"Number"</TableHeaderCell>
                                <TableHeaderCell>"Highlight"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Price"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Listed"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|item| item.id.value().to_string()
                                children=move |item| {
                                    let id = item.id.value().to_string();
                                    let number = item.number.clone();
                                    let number_cell = item.number.clone();
                                    let status = item.status;
                                    let listed = format_date(&item.metadata.created_at);
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
                                                        {move || {
                                                            let search = state.with(|s| s.search.clone());
                                                            highlight_matches(&number_cell, &search)
                                                        }}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item.highlight.clone().unwrap_or_default()}
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
                                                <TableCellLayout>{listed}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <button
                                                        class="table__action table__action--danger"
                                                        title=format!("Delete {}", number)
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
                    <VipNumberDetails
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
