//! Filterable list views offered by the dashboard.

use serde::Serialize;

use crate::filters::{FilterField, FilterOption, FilterSpec};

/// Column rendered in a list table; `key` indexes the backend item object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

const fn column(key: &'static str, label: &'static str) -> Column {
    Column { key, label }
}

const fn option(value: &'static str, label: &'static str) -> FilterOption {
    FilterOption { value, label }
}

/// A list page: where it lives, which backend resource it reads and how it
/// can be filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub slug: &'static str,
    pub title: &'static str,
    /// Dashboard path of the page.
    pub path: &'static str,
    /// Backend collection path.
    pub resource: &'static str,
    /// Key of the item array inside the backend payload.
    pub items_key: &'static str,
    pub filters: FilterSpec,
    pub columns: &'static [Column],
}

const ALL_STATUSES: FilterOption = option("all", "All Statuses");

const ACCOUNT_OPTIONS: &[FilterOption] = &[
    option("all", "All Accounts"),
    option("active", "Active"),
    option("inactive", "Inactive"),
];

const USER_STATUS_OPTIONS: &[FilterOption] = &[
    option("all", "All Users"),
    option("active", "Active"),
    option("blocked", "Blocked"),
];

const TRANSACTION_TYPE_OPTIONS: &[FilterOption] = &[
    option("all", "All Types"),
    option("Referral", "Referral"),
    option("Staking", "Staking"),
    option("Purchase", "Purchase"),
    option("Bonus", "Bonus"),
    option("Activation", "Activation"),
    option("Rank", "Rank"),
    option("Refund", "Refund"),
];

const CURRENCY_OPTIONS: &[FilterOption] = &[
    option("all", "All Currencies"),
    option("USDT", "USDT"),
    option("3TWENTY", "3TWENTY"),
];

const TRANSACTION_STATUS_OPTIONS: &[FilterOption] = &[
    ALL_STATUSES,
    option("Completed", "Completed"),
    option("Pending", "Pending"),
    option("Failed", "Failed"),
];

const STAKING_STATUS_OPTIONS: &[FilterOption] = &[
    ALL_STATUSES,
    option("Running", "Running"),
    option("Matured", "Matured"),
];

const WALLET_STATUS_OPTIONS: &[FilterOption] = &[
    option("all", "All Status"),
    option("Completed", "Completed"),
    option("Pending", "Pending"),
];

const WALLET_TYPE_OPTIONS: &[FilterOption] = &[
    option("all", "All Types"),
    option("Deposit", "Deposit"),
    option("Withdrawal", "Withdrawal"),
];

const FOUNDER_STATUS_OPTIONS: &[FilterOption] = &[
    ALL_STATUSES,
    option("Pending", "Pending"),
    option("Approved", "Approved"),
    option("Rejected", "Rejected"),
];

const USERS_FILTERS: [FilterField; 3] = [
    FilterField::text("search", "Search by email"),
    FilterField::select("status", "Account", ACCOUNT_OPTIONS),
    FilterField::select("userStatus", "User", USER_STATUS_OPTIONS),
];

const TRANSACTIONS_FILTERS: [FilterField; 5] = [
    FilterField::date("dateFrom", "From"),
    FilterField::date("dateTo", "To"),
    FilterField::select("transactionType", "Type", TRANSACTION_TYPE_OPTIONS),
    FilterField::select("currency", "Currency", CURRENCY_OPTIONS),
    FilterField::select("status", "Status", TRANSACTION_STATUS_OPTIONS),
];

const STAKINGS_FILTERS: [FilterField; 3] = [
    FilterField::date("dateFrom", "From"),
    FilterField::date("dateTo", "To"),
    FilterField::select("status", "Status", STAKING_STATUS_OPTIONS),
];

const WALLET_FILTERS: [FilterField; 4] = [
    FilterField::date("dateFrom", "From"),
    FilterField::date("dateTo", "To"),
    FilterField::select("status", "Status", WALLET_STATUS_OPTIONS),
    FilterField::select("transactionType", "Type", WALLET_TYPE_OPTIONS),
];

const FOUNDER_POOL_FILTERS: [FilterField; 1] =
    [FilterField::select("status", "Status", FOUNDER_STATUS_OPTIONS)];

pub const USERS: ListView = ListView {
    slug: "users",
    title: "Users",
    path: "/users",
    resource: "/users",
    items_key: "users",
    filters: FilterSpec::new(&USERS_FILTERS),
    columns: &[
        column("id", "ID"),
        column("name", "Name"),
        column("email", "Email"),
        column("token", "Tokens"),
        column("usdt", "USDT"),
        column("createdAt", "Joining Date"),
    ],
};

pub const TRANSACTIONS: ListView = ListView {
    slug: "transactions",
    title: "Transactions",
    path: "/transactions",
    resource: "/transactions",
    items_key: "transactions",
    filters: FilterSpec::new(&TRANSACTIONS_FILTERS),
    columns: &[
        column("id", "ID"),
        column("transactionType", "Type"),
        column("amount", "Amount"),
        column("currency", "Currency"),
        column("status", "Status"),
        column("createdAt", "Date"),
    ],
};

pub const STAKINGS: ListView = ListView {
    slug: "stakings",
    title: "Stakings",
    path: "/stakings",
    resource: "/stakings",
    items_key: "stakings",
    filters: FilterSpec::new(&STAKINGS_FILTERS),
    columns: &[
        column("id", "ID"),
        column("amount", "Amount"),
        column("apy", "APY"),
        column("status", "Status"),
        column("startDate", "Start"),
        column("endDate", "End"),
    ],
};

pub const WALLET_HISTORIES: ListView = ListView {
    slug: "wallet-histories",
    title: "Wallet Histories",
    path: "/wallet-histories",
    resource: "/wallet",
    items_key: "histories",
    filters: FilterSpec::new(&WALLET_FILTERS),
    columns: &[
        column("id", "ID"),
        column("transactionType", "Type"),
        column("amount", "Amount"),
        column("currency", "Currency"),
        column("status", "Status"),
        column("createdAt", "Date"),
    ],
};

pub const FOUNDER_POOL: ListView = ListView {
    slug: "founder-pool",
    title: "Founder Pool",
    path: "/founder-pool",
    resource: "/founder-pool",
    items_key: "founderPools",
    filters: FilterSpec::new(&FOUNDER_POOL_FILTERS),
    columns: &[
        column("id", "ID"),
        column("amount", "Amount"),
        column("status", "Status"),
        column("createdAt", "Applied"),
    ],
};

pub const ALL_VIEWS: [ListView; 5] = [
    USERS,
    TRANSACTIONS,
    STAKINGS,
    WALLET_HISTORIES,
    FOUNDER_POOL,
];

impl ListView {
    pub fn by_slug(slug: &str) -> Option<ListView> {
        ALL_VIEWS.iter().copied().find(|view| view.slug == slug)
    }
}
