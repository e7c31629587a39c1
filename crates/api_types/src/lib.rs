use serde::{Deserialize, Serialize};

pub mod gasto {
    use super::*;

    /// A stored expense as returned by the server.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Gasto {
        pub id: i64,
        pub descripcion: String,
        pub monto: f64,
        /// Date string, stored and returned verbatim.
        pub fecha: String,
        pub categoria: String,
        #[serde(rename = "tipoPago")]
        pub tipo_pago: String,
        pub comercio: String,
    }

    /// Request body for creating an expense.
    ///
    /// The identifier is assigned by the server; an `id` key in the body is
    /// ignored.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct GastoNew {
        pub descripcion: String,
        pub monto: f64,
        pub fecha: String,
        pub categoria: String,
        #[serde(rename = "tipoPago")]
        pub tipo_pago: String,
        pub comercio: String,
    }

    /// Request body for a partial update. Absent fields keep their stored
    /// value.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct GastoUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub descripcion: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub monto: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub fecha: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub categoria: Option<String>,
        #[serde(rename = "tipoPago", skip_serializing_if = "Option::is_none")]
        pub tipo_pago: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub comercio: Option<String>,
    }

    /// Query string for listing expenses.
    ///
    /// When both fields are absent every expense is returned, otherwise the
    /// listing is paginated by identifier.
    #[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
    pub struct GastoQuery {
        pub offset: Option<u64>,
        pub limit: Option<u64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GastoListResponse {
        pub gastos: Vec<Gasto>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GastoCount {
        pub count: u64,
    }
}
