//! Processor decline code table
//!
//! Codes and names follow Braintree's published authorization responses:
//! <https://developer.paypal.com/braintree/docs/reference/general/processor-responses/authorization-responses#decline-codes>

use crate::error::{ParseDeclineCodeError, ParseResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

macro_rules! decline_codes {
    ($($variant:ident = $code:literal => $name:literal,)+) => {
        /// Known processor decline code.
        ///
        /// The discriminant is the processor's integer code, so the compiler
        /// rejects two variants sharing a code. Serializes as the upstream
        /// symbolic name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(i32)]
        pub enum DeclineCode {
            $(
                #[serde(rename = $name)]
                $variant = $code,
            )+
        }

        impl DeclineCode {
            /// Every known decline code, in table order
            pub const ALL: &'static [DeclineCode] = &[$(DeclineCode::$variant,)+];

            /// Upstream symbolic name, e.g. `DO_NOT_HONOR`
            pub const fn name(self) -> &'static str {
                match self {
                    $(DeclineCode::$variant => $name,)+
                }
            }
        }
    };
}

decline_codes! {
    DoNotHonor = 2000 => "DO_NOT_HONOR",
    InsufficientFunds = 2001 => "INSUFFICIENT_FUNDS",
    LimitExceeded = 2002 => "LIMIT_EXCEEDED",
    CardholderActivityLimitExceeded = 2003 => "CARDHOLDER_ACTIVITY_LIMIT_EXCEEDED",
    ExpiredCard = 2004 => "EXPIRED_CARD",
    InvalidCreditCard = 2005 => "INVALID_CREDIT_CARD",
    InvalidExpirationDate = 2006 => "INVALID_EXPIRATION_DATE",
    NoAccount = 2007 => "NO_ACCOUNT",
    CardAccountLengthError = 2008 => "CARD_ACCOUNT_LENGTH_ERROR",
    NoSuchIssuer = 2009 => "NO_SUCH_ISSUER",
    CardIssuerDeclinedCvv = 2010 => "CARD_ISSUER_DECLINED_CVV",
    VoiceAuthorizationRequired = 2011 => "VOICE_AUTHORIZATION_REQUIRED",
    ProcessorDeclinedPossibleLostCard = 2012 => "PROCESSOR_DECLINED_POSSIBLE_LOST_CARD",
    ProcessorDeclinedPossibleStolenCard = 2013 => "PROCESSOR_DECLINED_POSSIBLE_STOLEN_CARD",
    ProcessorDeclinedFraudSuspected = 2014 => "PROCESSOR_DECLINED_FRAUD_SUSPECTED",
    TransactionNotAllowed = 2015 => "TRANSACTION_NOT_ALLOWED",
    DuplicateTransaction = 2016 => "DUPLICATE_TRANSACTION",
    CardholderStoppedBilling = 2017 => "CARDHOLDER_STOPPED_BILLING",
    CardholderStoppedAllBilling = 2018 => "CARDHOLDER_STOPPED_ALL_BILLING",
    InvalidTransaction = 2019 => "INVALID_TRANSACTION",
    Violation = 2020 => "VIOLATION",
    SecurityViolation = 2021 => "SECURITY_VIOLATION",
    DeclinedUpdatedCardholderAvailable = 2022 => "DECLINED_UPDATED_CARDHOLDER_AVAILABLE",
    ProcessorDoesNotSupportThisFeature = 2023 => "PROCESSOR_DOES_NOT_SUPPORT_THIS_FEATURE",
    CardTypeNotEnabled = 2024 => "CARD_TYPE_NOT_ENABLED",
    SetUpErrorMerchant = 2025 => "SET_UP_ERROR_MERCHANT",
    InvalidMerchantId = 2026 => "INVALID_MERCHANT_ID",
    SetUpErrorAmount = 2027 => "SET_UP_ERROR_AMOUNT",
    SetUpErrorHierarchy = 2028 => "SET_UP_ERROR_HIERARCHY",
    SetUpErrorCard = 2029 => "SET_UP_ERROR_CARD",
    SetUpErrorTerminal = 2030 => "SET_UP_ERROR_TERMINAL",
    EncryptionError = 2031 => "ENCRYPTION_ERROR",
    SurchargeNotPermitted = 2032 => "SURCHARGE_NOT_PERMITTED",
    InconsistentData = 2033 => "INCONSISTENT_DATA",
    NoActionTaken = 2034 => "NO_ACTION_TAKEN",
    PartialApprovalForAmountInGroup3Version = 2035 => "PARTIAL_APPROVAL_FOR_AMOUNT_IN_GROUP_3_VERSION",
    AuthorizationCouldNotBeFound = 2036 => "AUTHORIZATION_COULD_NOT_BE_FOUND",
    AlreadyReversed = 2037 => "ALREADY_REVERSED",
    ProcessorDeclined = 2038 => "PROCESSOR_DECLINED",
    InvalidAuthorizationCode = 2039 => "INVALID_AUTHORIZATION_CODE",
    InvalidStore = 2040 => "INVALID_STORE",
    DeclinedCallForApproval = 2041 => "DECLINED_CALL_FOR_APPROVAL",
    InvalidClientId = 2042 => "INVALID_CLIENT_ID",
    ErrorDoNotRetryCallIssuer = 2043 => "ERROR_DO_NOT_RETRY_CALL_ISSUER",
    DeclinedCallIssuer = 2044 => "DECLINED_CALL_ISSUER",
    InvalidMerchantNumber = 2045 => "INVALID_MERCHANT_NUMBER",
    Declined = 2046 => "DECLINED",
    CallIssuerPickUpCard = 2047 => "CALL_ISSUER_PICK_UP_CARD",
    InvalidAmount = 2048 => "INVALID_AMOUNT",
    InvalidSkuNumber = 2049 => "INVALID_SKU_NUMBER",
    InvalidCreditPlan = 2050 => "INVALID_CREDIT_PLAN",
    CreditCardNumberDoesNotMatchMethodOfPayment = 2051 => "CREDIT_CARD_NUMBER_DOES_NOT_MATCH_METHOD_OF_PAYMENT",
    InvalidLevel3Purchase = 2052 => "INVALID_LEVEL_3_PURCHASE",
    CardReportedAsLostOrStolen = 2053 => "CARD_REPORTED_AS_LOST_OR_STOLEN",
    ReversalAmountDoesNotMatchAuthorizationAmount = 2054 => "REVERSAL_AMOUNT_DOES_NOT_MATCH_AUTHORIZATION_AMOUNT",
    InvalidTransactionDivisionNumber = 2055 => "INVALID_TRANSACTION_DIVISION_NUMBER",
    TransactionAmountExceedsTheTransactionDivisionLimit = 2056 => "TRANSACTION_AMOUNT_EXCEEDS_THE_TRANSACTION_DIVISION_LIMIT",
    IssuerOrCardholderHasPutARestrictionOnTheCard = 2057 => "ISSUER_OR_CARDHOLDER_HAS_PUT_A_RESTRICTION_ON_THE_CARD",
    MerchantNotMastercardSecurecodeEnabled = 2058 => "MERCHANT_NOT_MASTERCARD_SECURECODE_ENABLED",
    AddressVerificationFailed = 2059 => "ADDRESS_VERIFICATION_FAILED",
    AddressVerificationAndCardSecurityCodeFailed = 2060 => "ADDRESS_VERIFICATION_AND_CARD_SECURITY_CODE_FAILED",
    InvalidTransactionData = 2061 => "INVALID_TRANSACTION_DATA",
    InvalidTaxAmount = 2062 => "INVALID_TAX_AMOUNT",
    PaypalBusinessAccountPreferenceResultedInTheTransactionFailing = 2063 => "PAYPAL_BUSINESS_ACCOUNT_PREFERENCE_RESULTED_IN_THE_TRANSACTION_FAILING",
    InvalidCurrencyCode = 2064 => "INVALID_CURRENCY_CODE",
    RefundTimeLimitExceeded = 2065 => "REFUND_TIME_LIMIT_EXCEEDED",
    PaypalBusinessAccountRestricted = 2066 => "PAYPAL_BUSINESS_ACCOUNT_RESTRICTED",
    AuthorizationExpired = 2067 => "AUTHORIZATION_EXPIRED",
    PaypalBusinessAccountLockedOrClosed = 2068 => "PAYPAL_BUSINESS_ACCOUNT_LOCKED_OR_CLOSED",
    PaypalBlockingDuplicateOrderIds = 2069 => "PAYPAL_BLOCKING_DUPLICATE_ORDER_IDS",
    PaypalBuyerRevokedPreApprovedPaymentAuthorization = 2070 => "PAYPAL_BUYER_REVOKED_PRE_APPROVED_PAYMENT_AUTHORIZATION",
    PaypalPayeeAccountInvalidOrDoesNotHaveAVerifiedEmail = 2071 => "PAYPAL_PAYEE_ACCOUNT_INVALID_OR_DOES_NOT_HAVE_A_VERIFIED_EMAIL",
    PaypalPayeeEmailIncorrectlyFormatted = 2072 => "PAYPAL_PAYEE_EMAIL_INCORRECTLY_FORMATTED",
    PaypalValidationError = 2073 => "PAYPAL_VALIDATION_ERROR",
    FundingInstrumentInThePaypalAccountWasDeclinedByTheProcessorOrBankOrItCantBeUsedForThisPayment = 2074 => "FUNDING_INSTRUMENT_IN_THE_PAYPAL_ACCOUNT_WAS_DECLINED_BY_THE_PROCESSR_OR_BANK_OR_IT_CANT_BE_USED_FOR_THIS_PAYMENT",
    PayerAccountIsLockedOrClosed = 2075 => "PAYER_ACCOUNT_IS_LOCKED_OR_CLOSED",
    PayerCannotPayForThisTransactionWithPaypal = 2076 => "PAYER_CANNOT_PAY_FOR_THIS_TRANSACTION_WITH_PAYPAL",
    TransactionRefusedDueToPaypalRiskModel = 2077 => "TRANSACTION_REFUSED_DUE_TO_PAYPAL_RISK_MODEL",
    InvalidSecurePaymentData = 2078 => "INVALID_SECURE_PAYMENT_DATA",
    PaypalMerchantAccountConfigurationError = 2079 => "PAYPAL_MERCHANT_ACCOUNT_CONFIGURATION_ERROR",
    InvalidUserCredentials = 2080 => "INVALID_USER_CREDENTIALS",
    PaypalPendingPaymentsAreNotSupported = 2081 => "PAYPAL_PENDING_PAYMENTS_ARE_NOT_SUPPORTED",
    PaypalDomesticTransactionRequired = 2082 => "PAYPAL_DOMESTIC_TRANSACTION_REQUIRED",
    PaypalPhoneNumberRequired = 2083 => "PAYPAL_PHONE_NUMBER_REQUIRED",
    PaypalTaxInfoRequired = 2084 => "PAYPAL_TAX_INFO_REQUIRED",
    PaypalPayeeBlockedTransaction = 2085 => "PAYPAL_PAYEE_BLOCKED_TRANSACTION",
    PaypalTransactionLimitExceeded = 2086 => "PAYPAL_TRANSACTION_LIMIT_EXCEEDED",
    PaypalReferenceTransactionsAreNotEnabledForYourAccount = 2087 => "PAYPAL_REFERENCE_TRANSACTIONS_ARE_NOT_ENABLED_FOR_YOUR_ACCOUNT",
    CurrencyNotEnabledForYourPaypalSellerAccount = 2088 => "CURRENCY_NOT_ENABLED_FOR_YOUR_PAYPAL_SELLER_ACCOUNT",
    PaypalPayeeEmailPermissionDeniedForThisRequest = 2089 => "PAYPAL_PAYEE_EMAIL_PERMISSION_DENIED_FOR_THIS_REQUEST",
    PaypalOrVenmoAccountNotConfiguredToRefundMoreThanSettledAmount = 2090 => "PAYPAL_OR_VENMO_ACCOUNT_NOT_CONFIGURED_TO_REFUND_MORE_THAN_SETTLED_AMOUNT",
    CurrencyOfThisTransactionMustMatchCurrencyOfYourPaypalAccount = 2091 => "CURRENCY_OF_THIS_TRANSACTION_MUST_MATCH_CURRENCY_OF_YOUR_PAYPAL_ACCOUNT",
    NoDataFoundTryAnotherVerificationMethod = 2092 => "NO_DATA_FOUND_TRY_ANOTHER_VERIFICATION_METHOD",
    PaypalPaymentMethodIsInvalid = 2093 => "PAYPAL_PAYMENT_METHOD_IS_INVALID",
    PaypalPaymentHasAlreadyBeenCompleted = 2094 => "PAYPAL_PAYMENT_HAS_ALREADY_BEEN_COMPLETED",
    PaypalRefundIsNotAllowedAfterPartialRefund = 2095 => "PAYPAL_REFUND_IS_NOT_ALLOWED_AFTER_PARTIAL_REFUND",
    PaypalBuyerAccountCantBeTheSameAsTheSellerAccount = 2096 => "PAYPAL_BUYER_ACCOUNT_CANT_BE_THE_SAME_AS_THE_SELLER_ACCOUNT",
    PaypalAuthorizationAmountLimitExceeded = 2097 => "PAYPAL_AUTHORIZATION_AMOUNT_LIMIT_EXCEEDED",
    PaypalAuthorizationCountLimitExceeded = 2098 => "PAYPAL_AUTHORIZATION_COUNT_LIMIT_EXCEEDED",
    CardholderAuthorizationRequired = 2099 => "CARDHOLDER_AUTHORIZATION_REQUIRED",
    PaypalChannelInitiatedBillingNotEnabledForYourAccount = 2100 => "PAYPAL_CHANNEL_INITIATED_BILLING_NOT_ENABLED_FOR_YOUR_ACCOUNT",
    AdditionalAuthorizationRequired = 2101 => "ADDITIONAL_AUTHORIZATION_REQUIRED",
    IncorrectPin = 2102 => "INCORRECT_PIN",
    PinTryExceeded = 2103 => "PIN_TRY_EXCEEDED",
    OfflineIssuerDeclined = 2104 => "OFFLINE_ISSUER_DECLINED",
    CannotAuthorizeAtThisTimeLifeCycle = 2105 => "CANNOT_AUTHORIZE_AT_THIS_TIME_LIFE_CYCLE",
    CannotAuthorizeAtThisTimePolicy = 2106 => "CANNOT_AUTHORIZE_AT_THIS_TIME_POLICY",
    CardNotActivated = 2107 => "CARD_NOT_ACTIVATED",
    ClosedCard = 2108 => "CLOSED_CARD",
    ProcessorNetworkUnavailableTryAgain = 3000 => "PROCESSOR_NETWORK_UNAVAILABLE_TRY_AGAIN",
}

/// Reverse index, built on first lookup and never mutated afterwards.
static BY_CODE: Lazy<HashMap<i32, DeclineCode>> = Lazy::new(|| {
    DeclineCode::ALL
        .iter()
        .map(|&known| (known.code(), known))
        .collect()
});

impl DeclineCode {
    /// Processor integer code
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Look up a known decline by its integer code
    pub fn from_code(code: i32) -> Option<Self> {
        BY_CODE.get(&code).copied()
    }

    /// Failure class of this decline
    pub const fn class(self) -> DeclineClass {
        match self {
            Self::ProcessorNetworkUnavailableTryAgain => DeclineClass::ProcessorUnavailable,
            _ => DeclineClass::ProcessorDeclined,
        }
    }
}

impl fmt::Display for DeclineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeclineCode {
    type Err = ParseDeclineCodeError;

    /// Parse a symbolic name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> ParseResult<Self> {
        let name = s.trim();
        if name.is_empty() {
            return Err(ParseDeclineCodeError::Empty);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|known| known.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseDeclineCodeError::UnknownName(name.to_string()))
    }
}

impl From<DeclineCode> for i32 {
    fn from(code: DeclineCode) -> Self {
        code.code()
    }
}

/// Coarse failure family of a known decline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclineClass {
    /// Card or account level decline (2000 series)
    ProcessorDeclined,
    /// Processor network unavailable (3000 series)
    ProcessorUnavailable,
}

impl DeclineClass {
    /// Get class name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProcessorDeclined => "processor_declined",
            Self::ProcessorUnavailable => "processor_unavailable",
        }
    }
}

impl fmt::Display for DeclineClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
