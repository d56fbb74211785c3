use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewDamageReport {
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub description: String,
    pub image_urls: Vec<String>,
}

/// Store a new damage report.
pub fn create_report<R>(
    repo: &R,
    author: &User,
    region: &MapBbox,
    new_report: NewDamageReport,
) -> Result<DamageReport>
where
    R: ReportRepo,
{
    let NewDamageReport {
        lat,
        lng,
        title,
        description,
        image_urls,
    } = new_report;
    let pos = super::validate_new_entry(region, lat, lng, &title, &description, image_urls.len())?;
    let report = DamageReport {
        id: Id::new(),
        pos,
        title,
        description,
        image_urls,
        comments: vec![],
        author_id: author.id.clone(),
        author_name: author.name.clone(),
        created_at: Timestamp::now(),
        status: ReportStatus::default(),
    };
    repo.create_report(report.clone())?;
    log::debug!("User {} created report {}", author.id, report.id);
    Ok(report)
}
