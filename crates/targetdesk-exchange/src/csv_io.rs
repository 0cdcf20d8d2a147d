//! CSV import parsing and entity-table export.
//!
//! Import is row counting only; mapping rows onto entities is not
//! implemented. Export writes the header row unconditionally, so an empty
//! table produces a header-only file.

use crate::upload::ExchangeError;
use targetdesk_db::{
    Compound, CompoundActivityRow, Disease, Structure, Target, TargetDiseaseLink,
};

/// Which table an import/export request refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Targets,
    Diseases,
    Compounds,
    Structures,
    TargetDiseases,
    CompoundActivities,
}

impl ExportKind {
    pub fn from_str(s: &str) -> Result<Self, ExchangeError> {
        match s {
            "targets" => Ok(Self::Targets),
            "diseases" => Ok(Self::Diseases),
            "compounds" => Ok(Self::Compounds),
            "structures" => Ok(Self::Structures),
            "target_diseases" => Ok(Self::TargetDiseases),
            "compound_activities" => Ok(Self::CompoundActivities),
            other => Err(ExchangeError::UnknownExportKind(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Targets => "targets",
            Self::Diseases => "diseases",
            Self::Compounds => "compounds",
            Self::Structures => "structures",
            Self::TargetDiseases => "target_diseases",
            Self::CompoundActivities => "compound_activities",
        }
    }
}

/// Count data rows in an uploaded CSV (header excluded).
pub fn count_csv_rows(bytes: &[u8]) -> Result<usize, ExchangeError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let mut rows = 0;
    for record in reader.records() {
        record?;
        rows += 1;
    }
    Ok(rows)
}

fn opt(s: &Option<String>) -> &str {
    s.as_deref().unwrap_or("")
}

fn opt_f64(v: Option<f64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

fn finish(wtr: csv::Writer<Vec<u8>>) -> Result<String, ExchangeError> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| ExchangeError::Io(std::io::Error::other(e.to_string())))?;
    // csv output of valid UTF-8 rows is valid UTF-8
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn targets_to_csv(rows: &[Target]) -> Result<String, ExchangeError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record([
        "id",
        "name",
        "category",
        "validation_status",
        "priority",
        "description",
        "mechanism",
        "organism",
        "molecular_weight",
    ])?;
    for t in rows {
        wtr.write_record([
            t.id.to_string().as_str(),
            &t.name,
            opt(&t.category),
            opt(&t.validation_status),
            opt(&t.priority),
            opt(&t.description),
            opt(&t.mechanism),
            opt(&t.organism),
            &opt_f64(t.molecular_weight),
        ])?;
    }
    finish(wtr)
}

pub fn diseases_to_csv(rows: &[Disease]) -> Result<String, ExchangeError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record([
        "id",
        "name",
        "category",
        "etiology",
        "prevalence",
        "treatment_landscape",
    ])?;
    for d in rows {
        wtr.write_record([
            d.id.to_string().as_str(),
            &d.name,
            opt(&d.category),
            opt(&d.etiology),
            opt(&d.prevalence),
            opt(&d.treatment_landscape),
        ])?;
    }
    finish(wtr)
}

pub fn compounds_to_csv(rows: &[Compound]) -> Result<String, ExchangeError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record([
        "id",
        "name",
        "smiles",
        "molecular_formula",
        "development_stage",
        "logp",
    ])?;
    for c in rows {
        wtr.write_record([
            c.id.to_string().as_str(),
            &c.name,
            opt(&c.smiles),
            opt(&c.molecular_formula),
            opt(&c.development_stage),
            &opt_f64(c.logp),
        ])?;
    }
    finish(wtr)
}

pub fn structures_to_csv(rows: &[Structure]) -> Result<String, ExchangeError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["id", "target_id", "pdb_id", "resolution", "file_path"])?;
    for s in rows {
        wtr.write_record([
            s.id.to_string().as_str(),
            &s.target_id.map(|id| id.to_string()).unwrap_or_default(),
            opt(&s.pdb_id),
            &opt_f64(s.resolution),
            opt(&s.file_path),
        ])?;
    }
    finish(wtr)
}

pub fn links_to_csv(rows: &[TargetDiseaseLink]) -> Result<String, ExchangeError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record([
        "target_id",
        "target_name",
        "disease_id",
        "disease_name",
        "relationship_type",
        "evidence_level",
    ])?;
    for l in rows {
        wtr.write_record([
            l.target_id.to_string().as_str(),
            &l.target_name,
            &l.disease_id.to_string(),
            &l.disease_name,
            opt(&l.relationship_type),
            opt(&l.evidence_level),
        ])?;
    }
    finish(wtr)
}

pub fn activities_to_csv(rows: &[CompoundActivityRow]) -> Result<String, ExchangeError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record([
        "id",
        "compound_name",
        "target_name",
        "activity_type",
        "activity_value",
        "activity_unit",
        "reference",
    ])?;
    for a in rows {
        wtr.write_record([
            a.id.to_string().as_str(),
            &a.compound_name,
            &a.target_name,
            opt(&a.activity_type),
            &opt_f64(a.activity_value),
            opt(&a.activity_unit),
            opt(&a.reference),
        ])?;
    }
    finish(wtr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_compound_table_exports_header_only() {
        let csv = compounds_to_csv(&[]).unwrap();
        assert_eq!(
            csv,
            "id,name,smiles,molecular_formula,development_stage,logp\n"
        );
    }

    #[test]
    fn compound_rows_follow_the_header() {
        let rows = vec![Compound {
            id: 1,
            name: "Aspirin".into(),
            smiles: Some("CC(=O)OC1=CC=CC=C1C(=O)O".into()),
            molecular_formula: Some("C9H8O4".into()),
            molecular_weight: None,
            logp: Some(1.2),
            development_stage: Some("Approved".into()),
            origin: None,
            patent_status: None,
            notes: None,
        }];
        let csv = compounds_to_csv(&rows).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,name,smiles,molecular_formula,development_stage,logp"
        );
        assert_eq!(
            lines.next().unwrap(),
            "1,Aspirin,CC(=O)OC1=CC=CC=C1C(=O)O,C9H8O4,Approved,1.2"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn row_count_excludes_header() {
        let data = b"name,category\nKRAS,GTPase\nEGFR,Kinase\n";
        assert_eq!(count_csv_rows(data).unwrap(), 2);
    }

    #[test]
    fn header_only_import_counts_zero() {
        assert_eq!(count_csv_rows(b"name,category\n").unwrap(), 0);
    }

    #[test]
    fn export_kind_round_trips() {
        for kind in [
            "targets",
            "diseases",
            "compounds",
            "structures",
            "target_diseases",
            "compound_activities",
        ] {
            assert_eq!(ExportKind::from_str(kind).unwrap().as_str(), kind);
        }
        assert!(ExportKind::from_str("papers").is_err());
    }
}
