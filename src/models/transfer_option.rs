//! Fixed wizard option lists

/// An entry in one of the fixed option lists the wizard renders
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOption {
    /// Icon asset key
    pub icon: &'static str,
    pub title: &'static str,
}

/// Step 1: transfer categories
pub fn money_transfer_options() -> Vec<TransferOption> {
    vec![
        TransferOption {
            icon: "user_square",
            title: "To Moneco balance",
        },
        TransferOption {
            icon: "store",
            title: "Bank transfer",
        },
        TransferOption {
            icon: "world",
            title: "Send to Africa",
        },
    ]
}

/// Step 2: destination channels
pub fn transfer_destination_options() -> Vec<TransferOption> {
    vec![
        TransferOption {
            icon: "arrow_square_right",
            title: "Mobile wallets",
        },
        TransferOption {
            icon: "arrow_square_right",
            title: "Bank transfer",
        },
    ]
}
