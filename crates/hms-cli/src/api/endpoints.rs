//! Request descriptors
//!
//! Every call the client makes is described by a [`RequestDescriptor`]:
//! which resource, which operation, which endpoint (path template plus ids),
//! and an optional JSON body. The dispatcher in [`super::client`] is the
//! only place that turns a descriptor into an HTTP request.

use crate::error::Result;
use reqwest::Method;
use serde::Serialize;
use std::fmt;

/// Backend resource a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Auth,
    Patients,
    Vitals,
    MedicalRecords,
    EmergencyContact,
    CheckIns,
    Appointments,
    Doctors,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Auth => "auth",
            Resource::Patients => "patients",
            Resource::Vitals => "vitals",
            Resource::MedicalRecords => "medical_records",
            Resource::EmergencyContact => "emergency_contact",
            Resource::CheckIns => "check_ins",
            Resource::Appointments => "appointments",
            Resource::Doctors => "doctors",
        };
        f.write_str(name)
    }
}

/// What the request does to the resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    RefreshToken,
    Register,
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn method(self) -> Method {
        match self {
            Operation::List | Operation::Get => Method::GET,
            Operation::Login
            | Operation::RefreshToken
            | Operation::Register
            | Operation::Create => Method::POST,
            Operation::Update => Method::PUT,
            Operation::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Login => "login",
            Operation::RefreshToken => "refresh_token",
            Operation::Register => "register",
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Path templates, with their ids filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `/api/token/`
    Token,
    /// `/api/token/refresh/`
    TokenRefresh,
    /// `/register`
    Register,
    /// `/patients/`
    Patients,
    /// `/patients/{id}`
    Patient(i64),
    /// `/patients/{id}/vitals`
    Vitals(i64),
    /// `/patients/{id}/records`
    MedicalRecords(i64),
    /// `/patients/{id}/records/{record_id}`
    MedicalRecord(i64, i64),
    /// `/patients/{id}/emergency_contact`
    EmergencyContact(i64),
    /// `/patients/check-ins`
    CheckIns,
    /// `/patients/check-ins/{id}`
    CheckIn(i64),
    /// `/patients/appointments`
    Appointments,
    /// `/patients/appointments/{id}`
    Appointment(i64),
    /// `/staff/doctors`
    Doctors,
    /// `/staff/doctors/{id}`
    Doctor(i64),
}

impl Endpoint {
    /// Path relative to the base URL
    pub fn path(&self) -> String {
        match self {
            Endpoint::Token => "/api/token/".to_string(),
            Endpoint::TokenRefresh => "/api/token/refresh/".to_string(),
            Endpoint::Register => "/register".to_string(),
            Endpoint::Patients => "/patients/".to_string(),
            Endpoint::Patient(id) => format!("/patients/{}", id),
            Endpoint::Vitals(id) => format!("/patients/{}/vitals", id),
            Endpoint::MedicalRecords(id) => format!("/patients/{}/records", id),
            Endpoint::MedicalRecord(id, record_id) => {
                format!("/patients/{}/records/{}", id, record_id)
            },
            Endpoint::EmergencyContact(id) => format!("/patients/{}/emergency_contact", id),
            Endpoint::CheckIns => "/patients/check-ins".to_string(),
            Endpoint::CheckIn(id) => format!("/patients/check-ins/{}", id),
            Endpoint::Appointments => "/patients/appointments".to_string(),
            Endpoint::Appointment(id) => format!("/patients/appointments/{}", id),
            Endpoint::Doctors => "/staff/doctors".to_string(),
            Endpoint::Doctor(id) => format!("/staff/doctors/{}", id),
        }
    }

    /// Full URL under `base_url`
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }

    pub fn resource(&self) -> Resource {
        match self {
            Endpoint::Token | Endpoint::TokenRefresh | Endpoint::Register => Resource::Auth,
            Endpoint::Patients | Endpoint::Patient(_) => Resource::Patients,
            Endpoint::Vitals(_) => Resource::Vitals,
            Endpoint::MedicalRecords(_) | Endpoint::MedicalRecord(..) => Resource::MedicalRecords,
            Endpoint::EmergencyContact(_) => Resource::EmergencyContact,
            Endpoint::CheckIns | Endpoint::CheckIn(_) => Resource::CheckIns,
            Endpoint::Appointments | Endpoint::Appointment(_) => Resource::Appointments,
            Endpoint::Doctors | Endpoint::Doctor(_) => Resource::Doctors,
        }
    }
}

/// One round trip, fully described
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub operation: Operation,
    pub endpoint: Endpoint,
    pub body: Option<serde_json::Value>,
}

impl RequestDescriptor {
    pub fn new(operation: Operation, endpoint: Endpoint) -> Self {
        Self {
            operation,
            endpoint,
            body: None,
        }
    }

    /// Attach a JSON body
    pub fn with_body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn resource(&self) -> Resource {
        self.endpoint.resource()
    }

    pub fn method(&self) -> Method {
        self.operation.method()
    }
}
