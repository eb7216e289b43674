//! Static site data: the project catalog and the skills accordion content.
//!
//! Records are authored once, in display order, and never mutated for the
//! lifetime of the page. Lookups by unknown id return `None`; callers treat
//! that as "do not open a detail view", never as a reason to panic.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub overview: &'static str,
    pub architecture: &'static [&'static str],
    pub results: &'static [&'static str],
    pub skills: &'static [&'static str],
    /// Image filenames, resolved against the images asset path at render time.
    pub images: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub fn projects() -> &'static [ProjectRecord] {
    PROJECTS
}

pub fn project(id: &str) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub fn skill_groups() -> &'static [SkillGroup] {
    SKILL_GROUPS
}

static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: "1",
        title: "Enterprise Virtualization Cluster with VMware vSphere, HA & Fault Tolerance",
        overview: "Designed, deployed, and validated a highly available enterprise \
            virtualization infrastructure using VMware vSphere. The environment was built to \
            ensure service continuity, centralized management, and infrastructure resilience \
            through High Availability (HA) and Fault Tolerance (FT), emphasizing reliability, \
            failover, and operational stability as used in production data centers.",
        architecture: &[
            "Deployed and configured multiple VMware ESXi hosts to form a clustered environment.",
            "Installed and configured vCenter Server for centralized management and monitoring.",
            "Created a vSphere cluster with High Availability (HA) enabled for automatic VM recovery.",
            "Implemented Fault Tolerance (FT) to ensure zero downtime for critical virtual machines.",
            "Configured shared iSCSI storage to support VM mobility and cluster services.",
            "Designed virtual networking for management, storage, and VM traffic separation.",
            "Integrated Active Directory authentication for role-based administrative access.",
        ],
        results: &[
            "Validated HA failover by simulating host outages and confirming automatic VM restarts.",
            "Achieved continuous availability for protected workloads using Fault Tolerance.",
            "Ensured reliable VM mobility and storage accessibility across cluster nodes.",
            "Demonstrated enterprise-grade resilience, redundancy, and manageability.",
            "Confirmed compliance with virtualization best practices for availability and fault tolerance.",
        ],
        skills: &[
            "VMware vSphere / ESXi",
            "vCenter Server",
            "High Availability (HA)",
            "Fault Tolerance (FT)",
            "iSCSI shared storage",
            "Virtual networking & traffic segmentation",
            "Active Directory integration",
            "Infrastructure testing & validation",
        ],
        images: &["vmware-arch-diagram.jpg", "vcenter-dashboard.png", "ha-test-result.png"],
    },
    ProjectRecord {
        id: "2",
        title: "Microsoft Exchange Server 2019 Infrastructure with Database Availability Group (DAG)",
        overview: "Designed, deployed, and validated a highly available enterprise email \
            infrastructure using Microsoft Exchange Server 2019. The environment supports secure \
            messaging, centralized administration, and high availability through a Database \
            Availability Group (DAG), simulating a real-world collaboration platform with Active \
            Directory integration, mailbox resiliency, and service continuity.",
        architecture: &[
            "Deployed a Windows Server-based Active Directory domain with integrated DNS services.",
            "Designed a structured Organizational Unit (OU) hierarchy following best practices.",
            "Created and managed users, security groups, and service accounts for Exchange administration.",
            "Installed and configured Microsoft Exchange Server 2019 on multiple member servers.",
            "Configured DHCP services to support dynamic client addressing within the environment.",
            "Implemented department-based file shares with access control enforced through GPOs.",
            "Created and mounted custom mailbox databases across Exchange servers.",
            "Configured mailboxes, shared mailboxes, resource mailboxes, and distribution groups.",
            "Performed Exchange administration using PowerShell, including mailbox and group creation.",
            "Implemented a DAG with mailbox database replication and failover capabilities.",
            "Configured a witness server to support DAG quorum and resiliency.",
        ],
        results: &[
            "Validated mail flow between users across different departments.",
            "Confirmed correct functionality of shared mailboxes, resource booking, and distribution groups.",
            "Verified mailbox database replication between Exchange servers.",
            "Tested DAG failover to ensure mailbox availability during simulated server outages.",
            "Achieved a resilient, fault-tolerant email platform aligned with Microsoft best practices.",
            "Demonstrated identity-based access control through AD and Exchange role separation.",
        ],
        skills: &[
            "Microsoft Exchange Server 2019",
            "Database Availability Group (DAG)",
            "Windows Server",
            "Active Directory Domain Services (AD DS)",
            "DNS & DHCP",
            "Group Policy Objects (GPO)",
            "Exchange Admin Center (EAC)",
            "Exchange Management Shell (PowerShell)",
            "Mailbox databases & replication",
            "Enterprise messaging & collaboration infrastructure",
        ],
        images: &["exchange-dag-diagram.jpg", "eac-mailflow.png", "powershell-output.png"],
    },
    ProjectRecord {
        id: "3",
        title: "Multi-Region Enterprise Network Architecture & IP Addressing Strategy",
        overview: "Capstone project modelling a scalable, multi-region enterprise network for \
            geographically distributed offices in North America and Asia. Focused on hardware \
            selection, IP addressing strategy, site connectivity, and infrastructure scalability; \
            emphasis on network design fundamentals and capacity planning rather than device-level \
            configuration.",
        architecture: &[
            "Designed a multi-site architecture connecting regional offices across geographic locations.",
            "Evaluated and selected workstation models for office staff and software development workloads.",
            "Recommended enterprise-grade server hardware optimized for virtualization.",
            "Designed a virtualized infrastructure model for hosting server workloads at each site.",
            "Developed a structured IP addressing scheme based on size, scalability, and regional segmentation.",
            "Selected IP address classes and subnetting strategies to support future growth.",
            "Planned inter-site connectivity to ensure reliable communication between regions.",
            "Executed the design in a vSphere-based environment, collaborating remotely on shared infrastructure.",
        ],
        results: &[
            "Delivered an end-to-end network design addressing compute, network, and server needs.",
            "Produced a scalable IP addressing plan that supports expansion without re-architecting.",
            "Demonstrated effective capacity planning for user devices and server workloads.",
            "Validated connectivity and interoperability between regional office environments.",
            "Collaborated in a distributed team, simulating real enterprise project workflows.",
        ],
        skills: &[
            "Enterprise network design & planning",
            "IP addressing & subnetting",
            "Multi-site infrastructure architecture",
            "Virtualization-ready server design",
            "Capacity planning & hardware evaluation",
            "vSphere-based lab environments",
            "Technical documentation & team collaboration",
        ],
        images: &["network-architecture-diagram.png", "ip-addressing-plan.jpg", "team-collab-screen.png"],
    },
    ProjectRecord {
        id: "4",
        title: "Multi-Site Secure Enterprise Network with Segmentation, Dynamic Routing & Centralized Services",
        overview: "Designed, deployed, and secured a multi-site enterprise network \
            interconnecting offices in Toronto, Vancouver, and Tokyo. Focus on secure inter-site \
            connectivity, network segmentation, centralized services, and controlled administrative \
            access, using both simulated and physical network equipment.",
        architecture: &[
            "Designed a Layer 3 multi-site network architecture interconnecting three locations.",
            "Implemented dynamic routing using EIGRP (AS100) for resilient inter-site communication.",
            "Segmented each site into Admin and General VLANs to enforce security boundaries.",
            "Applied inter-VLAN ACLs restricting General VLAN access to administrative resources.",
            "Deployed centralized services (web, TFTP backup, Syslog) hosted in the Tokyo site.",
            "Configured extended ACLs controlling access to centralized services by site and role.",
            "Implemented port security with real-time violation logging to a central Syslog server.",
            "Enabled secure remote device management using SSH.",
            "Configured role-based access control with distinct privilege levels per role.",
            "Modeled the network in Cisco Packet Tracer, then replicated it on physical equipment.",
        ],
        results: &[
            "Established reliable inter-site connectivity across all enterprise locations.",
            "Verified routing convergence and failover behavior using EIGRP.",
            "Confirmed VLAN isolation and ACL enforcement through controlled access testing.",
            "Validated secure access to centralized services based on user role and site location.",
            "Detected and logged port security violations in real time via Syslog monitoring.",
            "Demonstrated secure, auditable remote administration using SSH and RBAC.",
        ],
        skills: &[
            "Enterprise network architecture & design",
            "EIGRP dynamic routing",
            "VLAN segmentation & inter-VLAN routing",
            "Standard & extended Access Control Lists (ACLs)",
            "Port security & centralized logging (Syslog)",
            "Secure remote management (SSH)",
            "Role-Based Access Control (RBAC)",
            "Cisco Packet Tracer & physical network devices",
            "Enterprise documentation & testing",
        ],
        images: &["network-topology.jpg", "eigrp-tables.png", "syslog-monitor.png"],
    },
];

static SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Virtualization & Infrastructure",
        items: &[
            "VMware vSphere / ESXi clusters",
            "vCenter Server administration",
            "High Availability & Fault Tolerance",
            "iSCSI shared storage",
            "Capacity planning & hardware evaluation",
        ],
    },
    SkillGroup {
        title: "Networking",
        items: &[
            "Enterprise network design",
            "IP addressing & subnetting",
            "EIGRP dynamic routing",
            "VLAN segmentation & ACLs",
            "Cisco Packet Tracer & physical devices",
        ],
    },
    SkillGroup {
        title: "Windows Server & Identity",
        items: &[
            "Active Directory Domain Services",
            "DNS, DHCP & Group Policy",
            "Microsoft Exchange Server 2019",
            "Database Availability Groups",
            "Role-based access control",
        ],
    },
    SkillGroup {
        title: "Operations & Security",
        items: &[
            "PowerShell administration",
            "Centralized logging (Syslog)",
            "Port security & SSH management",
            "Infrastructure testing & validation",
            "Technical documentation",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for p in projects() {
            assert!(seen.insert(p.id), "duplicate project id {}", p.id);
        }
    }

    #[test]
    fn lookup_finds_records_in_authoring_order() {
        let ids: Vec<_> = projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert_eq!(project("3").unwrap().id, "3");
    }

    #[test]
    fn unknown_id_is_not_found() {
        assert!(project("99").is_none());
        assert!(project("").is_none());
    }

    #[test]
    fn exchange_project_counts_match_site_copy() {
        // The detail header advertises "10 technologies • 3 images" for this
        // record; keep the data in sync with that copy.
        let p = project("2").unwrap();
        assert!(p.title.contains("Exchange Server"));
        assert_eq!(p.skills.len(), 10);
        assert_eq!(p.images.len(), 3);
    }

    #[test]
    fn every_record_is_fully_authored() {
        for p in projects() {
            assert!(!p.title.is_empty());
            assert!(!p.overview.is_empty());
            assert!(!p.architecture.is_empty());
            assert!(!p.results.is_empty());
            assert!(!p.skills.is_empty());
            assert!(!p.images.is_empty());
        }
    }
}
