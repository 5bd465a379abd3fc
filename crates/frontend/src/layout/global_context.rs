use leptos::prelude::*;

/// Screens reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePage {
    VipNumbers,
    NumberPacks,
    Payments,
    Refunds,
    Categories,
}

impl ActivePage {
    pub fn title(&self) -> &'static str {
        match self {
            ActivePage::VipNumbers => "VIP Numbers",
            ActivePage::NumberPacks => "Number Packs",
            ActivePage::Payments => "Transactions",
            ActivePage::Refunds => "Refunds",
            ActivePage::Categories => "Categories",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ActivePage::VipNumbers => "phone",
            ActivePage::NumberPacks => "package",
            ActivePage::Payments => "credit-card",
            ActivePage::Refunds => "rotate-ccw",
            ActivePage::Categories => "tag",
        }
    }

    pub fn all() -> Vec<ActivePage> {
        vec![
            ActivePage::VipNumbers,
            ActivePage::NumberPacks,
            ActivePage::Payments,
            ActivePage::Refunds,
            ActivePage::Categories,
        ]
    }
}

/// App-wide UI state shared via context
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<ActivePage>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(ActivePage::VipNumbers),
        }
    }

    pub fn open(&self, page: ActivePage) {
        self.active_page.set(page);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
