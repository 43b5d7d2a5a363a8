mod sensitive;

pub use self::sensitive::Sensitive;
