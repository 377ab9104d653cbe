/// Unique record identifier
pub const ID: &str = "id";
/// Creation timestamp
pub const CREATED_AT: &str = "created_at";
/// Last update timestamp
pub const UPDATED_AT: &str = "updated_at";
/// Given name
pub const FIRSTNAME: &str = "firstname";
/// Family name
pub const LASTNAME: &str = "lastname";
/// Date of birth
pub const BIRTHDAY: &str = "birthday";
/// E-mail address
pub const EMAIL: &str = "email";
/// Login name
pub const USERNAME: &str = "username";
/// Password
pub const PASSWORD: &str = "password";
/// Phone number
pub const PHONENUMBER: &str = "phonenumber";
/// Country name
pub const COUNTRY: &str = "country";
/// City name
pub const CITY: &str = "city";

/// All columns in schema order.
pub const ALL: [&str; 12] = [
    ID,
    CREATED_AT,
    UPDATED_AT,
    FIRSTNAME,
    LASTNAME,
    BIRTHDAY,
    EMAIL,
    USERNAME,
    PASSWORD,
    PHONENUMBER,
    COUNTRY,
    CITY,
];

/// Timestamp-typed columns.
pub const TIMESTAMPS: [&str; 3] = [CREATED_AT, UPDATED_AT, BIRTHDAY];
