//! Message translation sets for the user-facing texts.
//!
//! Two languages are supported: English (default and fallback) and Portuguese.
//! Every key has a text in both sets; the table is declared once through the
//! `messages!` macro so the sets cannot drift apart.

use serde::{Deserialize, Serialize};

/// Supported UI languages.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    /// Language code, as stored under the `language` settings key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }

    /// Parse a stored language code. Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "pt" => Language::Pt,
            _ => Language::En,
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::En, Language::Pt]
    }

    /// Message key for the language's own name in the switcher.
    pub fn label_key(&self) -> MessageKey {
        match self {
            Language::En => MessageKey::LanguageEnglish,
            Language::Pt => MessageKey::LanguagePortuguese,
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::En => "🇬🇧",
            Language::Pt => "🇵🇹",
        }
    }
}

macro_rules! messages {
    ($($key:ident => ($en:expr, $pt:expr)),+ $(,)?) => {
        /// Key of a translatable user-facing message.
        #[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
        pub enum MessageKey {
            $($key),+
        }

        impl MessageKey {
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$key),+];
        }

        fn english(key: MessageKey) -> &'static str {
            match key {
                $(MessageKey::$key => $en),+
            }
        }

        fn portuguese(key: MessageKey) -> &'static str {
            match key {
                $(MessageKey::$key => $pt),+
            }
        }
    };
}

messages! {
    // Login page
    WelcomeTitle => ("Welcome to Ninjacart", "Bem-vindo à Ninjacart"),
    WelcomeSubtitle => (
        "Connecting farms to businesses with smart technology",
        "Conectando fazendas a empresas com tecnologia inteligente"
    ),
    LoginTitle => ("Log in to your account", "Entre na sua conta"),
    LoginSubtitle => ("Enter your credentials to continue", "Insira suas credenciais para continuar"),
    UsernameLabel => ("Employee ID", "ID do funcionário"),
    UsernamePlaceholder => ("Enter your employee ID", "Digite seu ID de funcionário"),
    PasswordLabel => ("Password", "Senha"),
    PasswordPlaceholder => ("Enter your password", "Digite sua senha"),
    ShowPassword => ("Show password", "Mostrar senha"),
    HidePassword => ("Hide password", "Ocultar senha"),
    RememberMe => ("Remember me", "Lembrar de mim"),
    ForgotPassword => ("Forgot password?", "Esqueceu a senha?"),
    LogIn => ("Log in", "Entrar"),
    LoggingIn => ("Logging in...", "Entrando..."),

    // Field validation
    UsernameRequired => ("Employee ID is required", "O ID do funcionário é obrigatório"),
    UsernameAlphanumeric => (
        "Username must contain only letters and numbers",
        "O nome de usuário deve conter apenas letras e números"
    ),
    UsernameTooShort => (
        "Username must be at least 3 characters long",
        "O nome de usuário deve ter pelo menos 3 caracteres"
    ),
    UsernameTooShortPrefixed => (
        "Username must be at least 5 characters long (NC + 3 characters)",
        "O nome de usuário deve ter pelo menos 5 caracteres (NC + 3 caracteres)"
    ),
    PasswordRequired => ("Password is required", "A senha é obrigatória"),
    PasswordTooShort => (
        "Password must be at least 6 characters",
        "A senha deve ter pelo menos 6 caracteres"
    ),

    // Login outcome
    FixErrors => ("Please fix the errors below", "Corrija os erros abaixo"),
    LoginSuccess => ("Login successful! Redirecting...", "Login realizado com sucesso! Redirecionando..."),
    InvalidCredentials => (
        "Invalid username or password. Please check your credentials.",
        "Nome de usuário ou senha inválidos. Verifique suas credenciais."
    ),
    AccessDenied => ("Access denied. Please contact support.", "Acesso negado. Entre em contato com o suporte."),
    ServerError => ("Server error. Please try again later.", "Erro no servidor. Tente novamente mais tarde."),
    NetworkError => (
        "Unable to connect to the server. Please check your internet connection.",
        "Não foi possível conectar ao servidor. Verifique sua conexão com a internet."
    ),
    Offline => (
        "You are currently offline. Please check your internet connection.",
        "Você está offline. Verifique sua conexão com a internet."
    ),
    LoginFailed => ("Login failed. Please try again.", "Falha no login. Tente novamente."),

    // Language switcher
    SelectLanguage => ("Select language", "Selecionar idioma"),
    LanguageEnglish => ("English", "Inglês"),
    LanguagePortuguese => ("Portuguese", "Português"),

    // Purchase-order page header
    PoTitle => ("View Purchase Orders", "Visualizar pedidos de compra"),
    SearchSku => ("Search SKU", "Pesquisar SKU"),
    Feedback => ("Feedback", "Feedback"),

    // Filters
    FilterCity => ("City", "Cidade"),
    FilterFacility => ("Facility", "Instalação"),
    FilterOrderType => ("Order type", "Tipo de pedido"),
    NormalOrder => ("Normal order", "Pedido normal"),
    UrgentOrder => ("Urgent order", "Pedido urgente"),
    FilterVendor => ("Vendor", "Fornecedor"),
    SearchVendor => ("Search vendor", "Pesquisar fornecedor"),
    FilterDate => ("Date", "Data"),
    SearchFacility => ("Search facility", "Pesquisar instalação"),
    LoadingCities => ("Loading cities...", "Carregando cidades..."),
    CitiesError => ("Error loading cities", "Erro ao carregar cidades"),
    LoadingFacilities => ("Loading facilities...", "Carregando instalações..."),
    FacilitiesError => ("Error loading facilities", "Erro ao carregar instalações"),
    NoFacilitiesForCity => (
        "No facilities available for selected city",
        "Nenhuma instalação disponível para a cidade selecionada"
    ),
    Inactive => ("(Inactive)", "(Inativa)"),

    // Page actions
    ActionFetch => ("Fetch", "Buscar"),
    ActionPrintPo => ("Print PO", "Imprimir PC"),
    ActionPrintGrn => ("Print GRN", "Imprimir GRN"),
    ActionExportCsv => ("Export CSV", "Exportar CSV"),
    ActionGenerateInvoice => ("Generate invoice", "Gerar fatura"),
    ActionAcknowledgeCopy => ("Acknowledge copy", "Cópia de confirmação"),
    ActionEditOrder => ("Edit order", "Editar pedido"),
    ActionCreateGrn => ("Create GRN", "Criar GRN"),
    ActionPrint => ("Print", "Imprimir"),
    ActionCancel => ("Cancel", "Cancelar"),
    ActionSave => ("Save", "Salvar"),
    ActionCreate => ("Create", "Criar"),
    Close => ("Close", "Fechar"),
    Loading => ("Loading purchase orders...", "Carregando pedidos de compra..."),

    // Table
    TableRowNo => ("#", "#"),
    TablePoId => ("PO ID", "ID do PC"),
    TableVendorName => ("Vendor name", "Nome do fornecedor"),
    TablePayment => ("Payment", "Pagamento"),
    TableOtherDetails => ("Other details", "Outros detalhes"),
    TableQtyTarget => ("Qty target", "Meta de qtd."),
    TableTargetDelivery => ("Target delivery", "Entrega prevista"),
    TableCreatedTime => ("Created time", "Criado em"),
    TableActions => ("Actions", "Ações"),
    TableNoResults => ("No results.", "Nenhum resultado."),
    SelectAll => ("Select all", "Selecionar todos"),
    SelectRow => ("Select row", "Selecionar linha"),
    StatusPaid => ("Paid", "Pago"),
    StatusPending => ("Pending", "Pendente"),
    StatusNotPaid => ("Not paid", "Não pago"),
    PaginationPrevious => ("Previous", "Anterior"),
    PaginationNext => ("Next", "Próximo"),

    // Modals
    EditOrderDesc => ("Update details for order", "Atualize os detalhes do pedido"),
    Address => ("Address", "Endereço"),
    CreateGrnDesc => (
        "Create a goods received note for order",
        "Criar uma nota de recebimento para o pedido"
    ),
    ReceivedQty => ("Received quantity", "Quantidade recebida"),
    Notes => ("Notes", "Observações"),
    NotesPlaceholder => ("Add notes...", "Adicionar observações..."),

    // Notices
    ExportSuccess => ("Export successful", "Exportação concluída"),
    ExportSuccessDesc => ("Purchase orders exported to CSV", "Pedidos de compra exportados para CSV"),
    ExportEmpty => ("Nothing to export", "Nada para exportar"),
    PrintInitiated => ("Print initiated", "Impressão iniciada"),
    PrintInitiatedDesc => ("Printing purchase order", "Imprimindo pedido de compra"),
    ActionInitiated => ("Action initiated", "Ação iniciada"),
    ActionInitiatedDesc => ("has been initiated", "foi iniciada"),
    OrderUpdated => ("Order updated", "Pedido atualizado"),
    OrderUpdatedDesc => ("The purchase order has been updated", "O pedido de compra foi atualizado"),
    GrnCreated => ("GRN created", "GRN criado"),
    GrnCreatedDesc => ("The goods received note has been created", "A nota de recebimento foi criada"),

    // Not found
    NotFoundTitle => ("404", "404"),
    NotFoundMessage => ("Page Not Found", "Página não encontrada"),
    BackToLogin => ("Back to login", "Voltar para o login"),
}

/// Translate a message key into the given language.
pub fn translate(language: Language, key: MessageKey) -> &'static str {
    match language {
        Language::En => english(key),
        Language::Pt => portuguese(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_both_texts() {
        for key in MessageKey::ALL {
            assert!(!translate(Language::En, *key).is_empty(), "{:?} en", key);
            assert!(!translate(Language::Pt, *key).is_empty(), "{:?} pt", key);
        }
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("pt"), Language::Pt);
        assert_eq!(Language::from_code("en"), Language::En);
        assert_eq!(Language::from_code("de"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.as_str()), lang);
        }
    }

    #[test]
    fn test_login_error_texts() {
        assert_eq!(
            translate(Language::En, MessageKey::InvalidCredentials),
            "Invalid username or password. Please check your credentials."
        );
        assert!(translate(Language::Pt, MessageKey::InvalidCredentials)
            .contains("Nome de usuário ou senha inválidos"));
        assert!(translate(Language::Pt, MessageKey::NetworkError)
            .contains("Não foi possível conectar ao servidor"));
    }
}
