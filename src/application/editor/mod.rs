pub mod add_line_item;
pub mod export_pdf;
pub mod get_editor_state;
pub mod remove_line_item;
pub mod set_currency;
pub mod switch_view;
pub mod update_document;
pub mod upload_logo;

pub use add_line_item::{AddLineItemCommand, AddLineItemResponse, AddLineItemUseCase};
pub use export_pdf::{ExportPdfCommand, ExportPdfResponse, ExportPdfUseCase};
pub use get_editor_state::{
  EditorStateResponse, GetEditorStateCommand, GetEditorStateUseCase, PreviewDto,
};
pub use remove_line_item::{RemoveLineItemCommand, RemoveLineItemResponse, RemoveLineItemUseCase};
pub use set_currency::{SetCurrencyCommand, SetCurrencyResponse, SetCurrencyUseCase};
pub use switch_view::{SwitchViewCommand, SwitchViewResponse, SwitchViewUseCase};
pub use update_document::{
  LineItemDto, UpdateDocumentCommand, UpdateDocumentResponse, UpdateDocumentUseCase,
};
pub use upload_logo::{UploadLogoCommand, UploadLogoResponse, UploadLogoUseCase};
