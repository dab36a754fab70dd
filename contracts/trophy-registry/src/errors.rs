use soroban_sdk::contracterror;

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TrophyErrorCode {
    Unauthorized = 1,
    AlreadyInitialized = 2,
    NotInitialized = 3,
}
