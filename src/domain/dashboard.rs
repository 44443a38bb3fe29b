//! View models for the monthly summary screen.
//!
//! Every figure here is a pre-formatted literal; the screen performs no arithmetic.

use super::entities::{Accent, Icon};

pub const KPI_CAPTION: &str = "Ver detalle";
pub const DEFAULT_DISPLAY_NAME: &str = "Valentina";

/// One metric tile in the dashboard grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KpiCardModel {
    pub title: String,
    /// Already formatted for display, e.g. `$4,150.00`.
    pub amount: String,
    pub icon: Icon,
    pub accent: Accent,
}

impl KpiCardModel {
    pub fn new(title: &str, amount: &str, icon: Icon, accent: Accent) -> Self {
        Self {
            title: title.to_string(),
            amount: amount.to_string(),
            icon,
            accent,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceModel {
    pub label: String,
    pub amount: String,
    pub action: String,
    pub icon: Icon,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardModel {
    pub greeting: String,
    pub subtitle: String,
    pub balance: BalanceModel,
    pub kpis: [KpiCardModel; 4],
}

impl DashboardModel {
    /// The monthly summary as shown to `display_name`, every card tinted with `accent`.
    pub fn monthly_summary(display_name: &str, accent: Accent) -> Self {
        DashboardModel {
            greeting: format!("Hola, {display_name}"),
            subtitle: "Resumen mensual".to_string(),
            balance: BalanceModel {
                label: "BALANCE NETO".to_string(),
                amount: "$2,845.40".to_string(),
                action: "Ver reporte detallado".to_string(),
                icon: Icon::LineChart,
            },
            kpis: [
                KpiCardModel::new("Ingresos", "$4,150.00", Icon::ArrowUp, accent),
                KpiCardModel::new("Gastos Fijos", "$850.00", Icon::CreditCard, accent),
                KpiCardModel::new("Ahorro", "$1,000.00", Icon::Bank, accent),
                KpiCardModel::new("Gastos Variables", "$454.60", Icon::ArrowDown, accent),
            ],
        }
    }
}

impl Default for DashboardModel {
    fn default() -> Self {
        DashboardModel::monthly_summary(DEFAULT_DISPLAY_NAME, Accent::default())
    }
}
