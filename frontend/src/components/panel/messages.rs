use common::error::ApiError;
use common::manager::ops::Reconciliation;
use common::model::RecordId;

pub enum Msg<E> {
    Load,
    Loaded(Result<Vec<E>, ApiError>),

    OpenCreate,
    OpenEdit(E),
    CloseForm,
    FieldChanged(&'static str, String),
    Submit,
    Submitted(Result<Reconciliation<E>, ApiError>),

    RequestDelete(RecordId),
    CancelDelete,
    ConfirmDelete,
    Deleted(RecordId, Result<(), ApiError>),

    SearchInput(String),
    Search,
    Searched(Result<Option<E>, ApiError>),
}
