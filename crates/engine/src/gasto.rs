//! The module contains `Gasto`, the expense record, and its table mapping.

use sea_orm::entity::{ActiveValue, prelude::*};

/// An expense.
///
/// Apart from the identifier every field is free-form: the engine stores and
/// returns exactly what it is given.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gasto {
    /// Assigned by the store on insert, `0` before that.
    pub id: i64,
    pub descripcion: String,
    pub monto: f64,
    pub fecha: String,
    pub categoria: String,
    pub tipo_pago: String,
    pub comercio: String,
}

/// Partial update of a [`Gasto`].
///
/// Each field is independent: `Some` overrides the stored value, `None`
/// keeps it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GastoPatch {
    pub descripcion: Option<String>,
    pub monto: Option<f64>,
    pub fecha: Option<String>,
    pub categoria: Option<String>,
    pub comercio: Option<String>,
    pub tipo_pago: Option<String>,
}

impl GastoPatch {
    /// Merge the patch over `current`. The identifier is never touched.
    pub fn apply(self, current: Gasto) -> Gasto {
        Gasto {
            id: current.id,
            descripcion: self.descripcion.unwrap_or(current.descripcion),
            monto: self.monto.unwrap_or(current.monto),
            fecha: self.fecha.unwrap_or(current.fecha),
            categoria: self.categoria.unwrap_or(current.categoria),
            tipo_pago: self.tipo_pago.unwrap_or(current.tipo_pago),
            comercio: self.comercio.unwrap_or(current.comercio),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "gasto")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub descripcion: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub monto: Option<f64>,
    pub fecha: Option<String>,
    pub categoria: Option<String>,
    #[sea_orm(column_name = "tipoPago")]
    pub tipo_pago: Option<String>,
    pub comercio: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Gasto {
    fn from(value: Model) -> Self {
        Self {
            id: value.id,
            descripcion: value.descripcion.unwrap_or_default(),
            monto: value.monto.unwrap_or_default(),
            fecha: value.fecha.unwrap_or_default(),
            categoria: value.categoria.unwrap_or_default(),
            tipo_pago: value.tipo_pago.unwrap_or_default(),
            comercio: value.comercio.unwrap_or_default(),
        }
    }
}

/// Insert form: the identifier is left to the store.
impl From<&Gasto> for ActiveModel {
    fn from(value: &Gasto) -> Self {
        Self {
            id: ActiveValue::NotSet,
            descripcion: ActiveValue::Set(Some(value.descripcion.clone())),
            monto: ActiveValue::Set(Some(value.monto)),
            fecha: ActiveValue::Set(Some(value.fecha.clone())),
            categoria: ActiveValue::Set(Some(value.categoria.clone())),
            tipo_pago: ActiveValue::Set(Some(value.tipo_pago.clone())),
            comercio: ActiveValue::Set(Some(value.comercio.clone())),
        }
    }
}
