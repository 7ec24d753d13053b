//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Repository、PasswordHasher）
//! - validation: 请求校验规则
//! - guard: 联系人/地址归属校验
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod guard;
pub mod identity;
pub mod ports;
pub mod queries;
pub mod validation;

// Re-exports
pub use commands::{
    // User commands
    LoginUser,
    LogoutUser,
    RegisterUser,
    UpdateCurrentUser,
    // Contact commands
    ContactInput,
    CreateContact,
    RemoveContact,
    UpdateContact,
    // Address commands
    AddressInput,
    CreateAddress,
    RemoveAddress,
    UpdateAddress,
    // Handlers
    handlers::{
        CreateAddressHandler, CreateContactHandler, LoginResponse, LoginUserHandler,
        LogoutUserHandler, RegisterUserHandler, RemoveAddressHandler, RemoveContactHandler,
        UpdateAddressHandler, UpdateContactHandler, UpdateCurrentUserHandler, UserResponse,
    },
};

pub use error::ApplicationError;
pub use guard::OwnershipGuard;
pub use identity::CurrentUser;

pub use ports::{
    AddressFields, AddressRecord, AddressRepositoryPort, ContactFields, ContactRecord,
    ContactRepositoryPort, HashError, PasswordHasherPort, RepositoryError, UserRecord,
    UserRepositoryPort,
};

pub use queries::{
    // User queries
    AuthenticateToken,
    GetCurrentUser,
    // Contact queries
    GetContact,
    SearchContacts,
    // Address queries
    GetAddress,
    ListAddresses,
    // Handlers
    handlers::{
        AuthenticateTokenHandler, GetAddressHandler, GetContactHandler, GetCurrentUserHandler,
        ListAddressesHandler, SearchContactsHandler, SearchContactsResponse,
    },
};

pub use validation::{
    parse_id, parse_integer, FieldViolation, Rule, ValidationErrors, Validator,
};
