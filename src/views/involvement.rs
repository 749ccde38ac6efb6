use super::sections::{Card, Link};
use serde::Serialize;

/// Static payment details shown by the donation dialog.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaymentQr {
    pub title: &'static str,
    pub description: &'static str,
    pub image_path: &'static str,
    pub image_alt: &'static str,
}

pub const PHONEPE_QR: PaymentQr = PaymentQr {
    title: "Donate via PhonePe",
    description: "Scan the QR code below using your PhonePe app to make a donation",
    image_path: "/assets/qr-code.jpeg",
    image_alt: "PhonePe QR Code for Kaosar Ahmed Choudhury",
};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DonationDialog {
    pub open: bool,
}

impl DonationDialog {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// QR details while the dialog is showing.
    pub fn content(&self) -> Option<&'static PaymentQr> {
        self.open.then_some(&PHONEPE_QR)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InvolvementOption {
    pub card: Card,
    pub action: Link,
    /// Opens the donation dialog instead of following `action.href`.
    pub opens_dialog: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GetInvolvedSection {
    pub id: &'static str,
    pub heading: &'static str,
    pub tagline: &'static str,
    pub options: Vec<InvolvementOption>,
    pub closing: Card,
    pub dialog: DonationDialog,
    pub payment: PaymentQr,
}

impl Default for GetInvolvedSection {
    fn default() -> Self {
        GetInvolvedSection {
            id: "involved",
            heading: "Get Involved",
            tagline: "Join us in making a difference in our communities",
            options: vec![
                InvolvementOption {
                    card: Card {
                        title: "Volunteer",
                        body: "Share your time and skills to support our programs and make a direct impact in the community.",
                    },
                    action: Link { label: "Sign Up", href: "#contact" },
                    opens_dialog: false,
                },
                InvolvementOption {
                    card: Card {
                        title: "Partner",
                        body: "Collaborate with us on programs and initiatives that align with your organization's mission.",
                    },
                    action: Link { label: "Learn More", href: "#contact" },
                    opens_dialog: false,
                },
                InvolvementOption {
                    card: Card {
                        title: "Donate",
                        body: "Your contribution directly supports our programs and helps us expand our reach to more communities.",
                    },
                    action: Link { label: "Donate Now", href: "#involved" },
                    opens_dialog: true,
                },
            ],
            closing: Card {
                title: "Every contribution makes a difference",
                body: "Whether you volunteer your time, partner with us, or make a financial contribution, you're helping us create lasting positive change in our communities.",
            },
            dialog: DonationDialog::default(),
            payment: PHONEPE_QR,
        }
    }
}
