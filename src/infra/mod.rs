//! External collaborators: the ERP data provider.

pub mod erp;
