//! Typed operations, grouped by resource
//!
//! Each method describes exactly one round trip and hands it to
//! [`ApiClient::dispatch`]. The groups borrow the client, so they are cheap
//! to create per call: `client.patients().vitals(5).get()`.

use crate::api::client::ApiClient;
use crate::api::endpoints::{Endpoint, Operation, RequestDescriptor};
use crate::api::types::*;
use crate::error::Result;

// ============================================================================
// Authentication
// ============================================================================

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Exchange email and password for a token pair. Does not store it.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = RequestDescriptor::new(Operation::Login, Endpoint::Token).with_body(&body)?;
        self.client.dispatch(request).await
    }

    /// Exchange a refresh token for a new access token. Does not store it.
    pub async fn refresh_token(&self, refresh: &str) -> Result<AccessToken> {
        let body = RefreshRequest {
            refresh: refresh.to_string(),
        };
        let request = RequestDescriptor::new(Operation::RefreshToken, Endpoint::TokenRefresh)
            .with_body(&body)?;
        self.client.dispatch(request).await
    }

    pub async fn register(&self, profile: &RegisterRequest) -> Result<Message> {
        let request =
            RequestDescriptor::new(Operation::Register, Endpoint::Register).with_body(profile)?;
        self.client.dispatch(request).await
    }
}

// ============================================================================
// Patients
// ============================================================================

pub struct PatientsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PatientsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<PatientList> {
        let request = RequestDescriptor::new(Operation::List, Endpoint::Patients);
        self.client.dispatch(request).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Patient> {
        let request = RequestDescriptor::new(Operation::Get, Endpoint::Patient(id));
        self.client.dispatch(request).await
    }

    pub async fn create(&self, patient: &NewPatient) -> Result<Patient> {
        let request =
            RequestDescriptor::new(Operation::Create, Endpoint::Patients).with_body(patient)?;
        self.client.dispatch(request).await
    }

    pub async fn update(&self, id: i64, changes: &PatientUpdate) -> Result<Patient> {
        let request =
            RequestDescriptor::new(Operation::Update, Endpoint::Patient(id)).with_body(changes)?;
        self.client.dispatch(request).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let request = RequestDescriptor::new(Operation::Delete, Endpoint::Patient(id));
        self.client.dispatch(request).await
    }

    pub fn vitals(&self, patient_id: i64) -> VitalsApi<'a> {
        VitalsApi {
            client: self.client,
            patient_id,
        }
    }

    pub fn medical_records(&self, patient_id: i64) -> MedicalRecordsApi<'a> {
        MedicalRecordsApi {
            client: self.client,
            patient_id,
        }
    }

    pub fn emergency_contact(&self, patient_id: i64) -> EmergencyContactApi<'a> {
        EmergencyContactApi {
            client: self.client,
            patient_id,
        }
    }
}

/// `/patients/{id}/vitals`
pub struct VitalsApi<'a> {
    client: &'a ApiClient,
    patient_id: i64,
}

impl VitalsApi<'_> {
    fn endpoint(&self) -> Endpoint {
        Endpoint::Vitals(self.patient_id)
    }

    pub async fn get(&self) -> Result<Vitals> {
        let request = RequestDescriptor::new(Operation::Get, self.endpoint());
        self.client.dispatch(request).await
    }

    pub async fn create(&self, vitals: &NewVitals) -> Result<Vitals> {
        let request = RequestDescriptor::new(Operation::Create, self.endpoint()).with_body(vitals)?;
        self.client.dispatch(request).await
    }

    pub async fn update(&self, changes: &VitalsUpdate) -> Result<Vitals> {
        let request =
            RequestDescriptor::new(Operation::Update, self.endpoint()).with_body(changes)?;
        self.client.dispatch(request).await
    }

    pub async fn delete(&self) -> Result<()> {
        let request = RequestDescriptor::new(Operation::Delete, self.endpoint());
        self.client.dispatch(request).await
    }
}

/// `/patients/{id}/records`
pub struct MedicalRecordsApi<'a> {
    client: &'a ApiClient,
    patient_id: i64,
}

impl MedicalRecordsApi<'_> {
    pub async fn get_all(&self) -> Result<Vec<MedicalRecord>> {
        let request =
            RequestDescriptor::new(Operation::List, Endpoint::MedicalRecords(self.patient_id));
        self.client.dispatch(request).await
    }

    pub async fn get_by_id(&self, record_id: i64) -> Result<MedicalRecord> {
        let endpoint = Endpoint::MedicalRecord(self.patient_id, record_id);
        self.client
            .dispatch(RequestDescriptor::new(Operation::Get, endpoint))
            .await
    }

    pub async fn create(&self, record: &NewMedicalRecord) -> Result<MedicalRecord> {
        let request =
            RequestDescriptor::new(Operation::Create, Endpoint::MedicalRecords(self.patient_id))
                .with_body(record)?;
        self.client.dispatch(request).await
    }

    pub async fn update(
        &self,
        record_id: i64,
        changes: &MedicalRecordUpdate,
    ) -> Result<MedicalRecord> {
        let endpoint = Endpoint::MedicalRecord(self.patient_id, record_id);
        let request = RequestDescriptor::new(Operation::Update, endpoint).with_body(changes)?;
        self.client.dispatch(request).await
    }

    pub async fn delete(&self, record_id: i64) -> Result<()> {
        let endpoint = Endpoint::MedicalRecord(self.patient_id, record_id);
        self.client
            .dispatch(RequestDescriptor::new(Operation::Delete, endpoint))
            .await
    }
}

/// `/patients/{id}/emergency_contact`
pub struct EmergencyContactApi<'a> {
    client: &'a ApiClient,
    patient_id: i64,
}

impl EmergencyContactApi<'_> {
    fn endpoint(&self) -> Endpoint {
        Endpoint::EmergencyContact(self.patient_id)
    }

    pub async fn get(&self) -> Result<EmergencyContact> {
        let request = RequestDescriptor::new(Operation::Get, self.endpoint());
        self.client.dispatch(request).await
    }

    pub async fn create(&self, contact: &NewEmergencyContact) -> Result<EmergencyContact> {
        let request =
            RequestDescriptor::new(Operation::Create, self.endpoint()).with_body(contact)?;
        self.client.dispatch(request).await
    }

    pub async fn update(&self, changes: &EmergencyContactUpdate) -> Result<EmergencyContact> {
        let request =
            RequestDescriptor::new(Operation::Update, self.endpoint()).with_body(changes)?;
        self.client.dispatch(request).await
    }

    pub async fn delete(&self) -> Result<()> {
        let request = RequestDescriptor::new(Operation::Delete, self.endpoint());
        self.client.dispatch(request).await
    }
}

// ============================================================================
// Check-ins and appointments
// ============================================================================

pub struct CheckInsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CheckInsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<CheckIn>> {
        let request = RequestDescriptor::new(Operation::List, Endpoint::CheckIns);
        self.client.dispatch(request).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<CheckIn> {
        let request = RequestDescriptor::new(Operation::Get, Endpoint::CheckIn(id));
        self.client.dispatch(request).await
    }

    pub async fn create(&self, check_in: &NewCheckIn) -> Result<CheckIn> {
        let request =
            RequestDescriptor::new(Operation::Create, Endpoint::CheckIns).with_body(check_in)?;
        self.client.dispatch(request).await
    }

    pub async fn update(&self, id: i64, changes: &CheckInUpdate) -> Result<CheckIn> {
        let request =
            RequestDescriptor::new(Operation::Update, Endpoint::CheckIn(id)).with_body(changes)?;
        self.client.dispatch(request).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let request = RequestDescriptor::new(Operation::Delete, Endpoint::CheckIn(id));
        self.client.dispatch(request).await
    }
}

pub struct AppointmentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AppointmentsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Appointment>> {
        let request = RequestDescriptor::new(Operation::List, Endpoint::Appointments);
        self.client.dispatch(request).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Appointment> {
        let request = RequestDescriptor::new(Operation::Get, Endpoint::Appointment(id));
        self.client.dispatch(request).await
    }

    pub async fn create(&self, appointment: &NewAppointment) -> Result<Appointment> {
        let request = RequestDescriptor::new(Operation::Create, Endpoint::Appointments)
            .with_body(appointment)?;
        self.client.dispatch(request).await
    }

    pub async fn update(&self, id: i64, changes: &AppointmentUpdate) -> Result<Appointment> {
        let request = RequestDescriptor::new(Operation::Update, Endpoint::Appointment(id))
            .with_body(changes)?;
        self.client.dispatch(request).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let request = RequestDescriptor::new(Operation::Delete, Endpoint::Appointment(id));
        self.client.dispatch(request).await
    }
}

// ============================================================================
// Doctors
// ============================================================================

pub struct DoctorsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> DoctorsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self) -> Result<DoctorList> {
        let request = RequestDescriptor::new(Operation::List, Endpoint::Doctors);
        self.client.dispatch(request).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Doctor> {
        let request = RequestDescriptor::new(Operation::Get, Endpoint::Doctor(id));
        self.client.dispatch(request).await
    }

    pub async fn create(&self, doctor: &NewDoctor) -> Result<Doctor> {
        let request =
            RequestDescriptor::new(Operation::Create, Endpoint::Doctors).with_body(doctor)?;
        self.client.dispatch(request).await
    }

    pub async fn update(&self, id: i64, changes: &DoctorUpdate) -> Result<Doctor> {
        let request =
            RequestDescriptor::new(Operation::Update, Endpoint::Doctor(id)).with_body(changes)?;
        self.client.dispatch(request).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let request = RequestDescriptor::new(Operation::Delete, Endpoint::Doctor(id));
        self.client.dispatch(request).await
    }
}
